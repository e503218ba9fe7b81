pub mod countdown;
pub mod nav;
