pub mod caller;
pub mod declaration;
pub mod locator;
pub mod paths;
pub mod root_finder;
