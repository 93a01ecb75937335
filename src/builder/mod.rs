/*!
Tools for building a knowledge base within a context.

# Basic methods

The library has two basic methods for building a knowledge base:
- [add_assertion](crate::context::Context::add_assertion), to append an expression built with the [constructors](crate::structures::expression).
- [read_dimacs](crate::context::Context::read_dimacs), to load a clause-per-line file.

# Example

```rust
# use stoat_kb::config::Config;
# use stoat_kb::context::Context;
# use stoat_kb::reports::Report;
# use stoat_kb::structures::expression::Expression;
let mut the_context = Context::from_config(Config::default());

let p = Expression::symbol("p");
let q = Expression::symbol("q");

the_context.add_assertion(Expression::or_of([
    Expression::not_of(p.clone()),
    q.clone(),
]));
the_context.add_assertion(p);

assert_eq!(the_context.entails(&[q]), Ok(Report::Entailed));
```
*/

mod dimacs;
pub use dimacs::ParserInfo;
