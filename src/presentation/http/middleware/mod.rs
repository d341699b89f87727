pub mod method_override;

pub use method_override::method_override;
