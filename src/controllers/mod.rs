mod http;

pub use http::PixelHttpController;
