pub mod installer;
