pub mod call;
pub mod pipe;
pub mod project;
