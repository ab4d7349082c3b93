mod model_swift;

pub use model_swift::ModelSwift;
