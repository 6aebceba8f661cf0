//! The 23 GoF design patterns, each as a small self-contained module.
//!
//! Operations return what they would otherwise print (strings, logs, counts) so
//! that the behaviour of each pattern can be asserted on.
//!
//! # Submodules
//! - [`creational`]: abstract factory, builder, factory method, prototype, singleton
//! - [`structural`]: adapter, bridge, composite, decorator, facade, flyweight, proxy
//! - [`behavioral`]: chain of responsibility, command, interpreter, iterator,
//!   mediator, memento, observer, state, strategy, template method, visitor

pub mod behavioral;
pub mod creational;
pub mod structural;
