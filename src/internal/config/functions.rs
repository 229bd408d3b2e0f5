pub mod expand_home;

pub use expand_home::expand_home;
