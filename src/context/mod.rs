/*!
The context --- to which assertions are added and within which queries take place.

A context pairs a [configuration](crate::config) with an ordered sequence of assertions, the knowledge base.
Assertion order never affects which answers are derivable: the procedures favour earlier assertions on ties, and this is a deterministic tie-break rather than semantics.

The procedures are methods on the context, and none of them revise the knowledge base: each derives fresh values.
See:
- [forward_chaining](crate::procedures::chaining) to saturate a set of facts.
- [entails](crate::procedures::entail) for goal-directed queries.
- [preprocess](crate::procedures::preprocess) for a normalized copy of the knowledge base.
- [read_dimacs](crate::context::Context::read_dimacs) to load a knowledge base from a clause file.

# Example

```rust
# use stoat_kb::config::Config;
# use stoat_kb::context::Context;
# use stoat_kb::reports::Report;
# use stoat_kb::structures::expression::Expression;
let mut the_context = Context::from_config(Config::default());

let p = Expression::symbol("p");
let q = Expression::symbol("q");

the_context.add_assertion(p.clone());
the_context.add_assertion(Expression::implies(p, q.clone()));

assert_eq!(the_context.entails(&[q]), Ok(Report::Entailed));
```
*/

use crate::{config::Config, structures::expression::Expression};

/// A context: a configuration together with an ordered knowledge base of assertions.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The knowledge base, in assertion order.
    pub assertions: Vec<Expression>,
}

impl Context {
    /// A context with the given configuration and an empty knowledge base.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            assertions: Vec::new(),
        }
    }

    /// Appends an assertion to the knowledge base.
    pub fn add_assertion(&mut self, assertion: Expression) {
        self.assertions.push(assertion);
    }

    /// The number of assertions in the knowledge base.
    pub fn assertion_count(&self) -> usize {
        self.assertions.len()
    }
}
