pub mod request;

pub use request::GenerateContentRequestDto;
