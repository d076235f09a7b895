pub mod precondition;
