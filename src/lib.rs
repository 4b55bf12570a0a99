//! Find stable Gentoo packages whose Python targets leave out a baseline
//! interpreter, working from a decoded eix collection.
pub mod cli;
pub mod load;
pub mod model;
pub mod policy;
pub mod report;
pub mod search;
pub mod select;
pub mod targets;
