pub mod entities;
pub mod pages;
pub mod search;
pub mod signup;
