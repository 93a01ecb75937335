/*!
Reports for the context.
*/

/// High-level reports regarding an entailment query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The knowledge base of the context entails the goals.
    Entailed,

    /// The goals could not be derived from the knowledge base of the context.
    NotEntailed,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "YES"),
            Self::NotEntailed => write!(f, "NO"),
        }
    }
}
