//! モデルモジュール

mod request;
mod response;

pub use request::AnalysisRequest;
pub use response::AnalysisResponse;
