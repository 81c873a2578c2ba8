use crate::{
    controllers::PixelHttpController,
    infrastructure::drivers::{EspPixelDriver, EspRestart},
};

pub type PixelRouter = pixel_webui_core::CommandRouter<'static, EspPixelDriver<'static>>;
pub type WebUiController = PixelHttpController<EspPixelDriver<'static>, EspRestart>;
