/// Game tuning parameters for the training arena
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 4.0; // pixels per tick
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between arena edge and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED: f32 = 5.0; // pixels per tick
    pub const MAX_SERVE_ANGLE: f32 = 0.0; // flat serves

    // Seeding
    pub const DEFAULT_SEED: u64 = 12345;
}
