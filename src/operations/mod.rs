pub mod scale;

pub use scale::scale;
