//! Constants for public-key algorithms over prime-field curves

pub mod sm2;
