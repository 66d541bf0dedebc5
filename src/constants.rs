// Page wiring and hero scene constants.
//
// Element ids match the static page markup; scene values keep magic numbers
// out of the renderer.
// Hero
pub const HERO_CANVAS_ID: &str = "3d-canvas";
pub const HERO_CONTENT_ID: &str = "hero-content";
pub const HERO_MODEL_URL: &str = "base_basic_shaded.glb";

// Scrollytelling
pub const SCROLLY_CONTAINER_ID: &str = "scrolly-video";
pub const SCROLLY_VIDEO_ID: &str = "cup-video";
pub const SCROLLY_CANVAS_ID: &str = "video-canvas";
pub const SCROLL_PROMPT_ID: &str = "scroll-prompt";
pub const TEXT_OVERLAY_ID: &str = "video-text-overlay";

// Menu
pub const MENU_DATA_URL: &str = "data/menu.json";
pub const MENU_CONTENT_ID: &str = "menu-content";
pub const CATEGORY_LINKS_ID: &str = "category-links";
pub const ITEM_MODAL_ID: &str = "item-modal";
pub const CLOSE_MODAL_ID: &str = "close-modal-btn";
pub const MODAL_IMAGE_CONTAINER_ID: &str = "modal-image-container";
pub const MODAL_IMAGE_ID: &str = "modal-image";
pub const MODAL_NAME_ID: &str = "modal-name";
pub const MODAL_DESCRIPTION_ID: &str = "modal-description";
pub const MODAL_NUTRITION_ID: &str = "modal-nutrition";
pub const MENU_LOAD_FAILED_HTML: &str =
    "<p class=\"text-center text-red-500\">Failed to load menu. Please try again later.</p>";
pub const SCROLL_SPY_ROOT_MARGIN: &str = "-20% 0px -80% 0px";

// Camera
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Lighting: warm hemisphere plus a single warm key light
pub const SKY_COLOR: [f32; 3] = [1.0, 0.933, 0.694]; // 0xffeeb1
pub const GROUND_COLOR: [f32; 3] = [0.031, 0.031, 0.125]; // 0x080820
pub const HEMISPHERE_INTENSITY: f32 = 2.5;
pub const KEY_LIGHT_COLOR: [f32; 3] = [1.0, 0.663, 0.361]; // 0xffa95c
pub const KEY_LIGHT_POS: [f32; 3] = [-10.0, 20.0, 20.0];
pub const KEY_LIGHT_INTENSITY: f32 = 4.0;
