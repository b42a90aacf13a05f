//! Shared numeric constants for the canvas crate.

// ── Screen ──────────────────────────────────────────────────────

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: f64 = 1024.0;

/// Side length of the square board area in pixels (5/9 of the screen).
pub const BOARD_EXTENT_PX: f64 = SCREEN_WIDTH * 5.0 / 9.0;

/// Top-left corner of the board border.
pub const BOARD_ORIGIN_X: f64 = 5.0;
pub const BOARD_ORIGIN_Y: f64 = 5.0;

/// Largest board the client will build; wider `joined` frames are dropped.
pub const MAX_BOARD_WIDTH: usize = 256;

/// Thickness of grid lines in pixels.
pub const LINE_THICKNESS: f64 = 4.0;

/// Opacity of move-candidate overlay tiles.
pub const CANDIDATE_ALPHA: f64 = 0.5;

// ── Shape tray ──────────────────────────────────────────────────

/// Gap between the bottom of the board and the shape tray.
pub const TRAY_TOP_MARGIN: f64 = 10.0;

/// Tray tiles are this much narrower than board tiles.
pub const TRAY_TILE_SHRINK: f64 = 5.0;

/// Extra spacing added to the grid line thickness between tray tiles.
pub const TRAY_GAP_PAD: f64 = 5.0;

/// Horizontal space between consecutive shapes in the tray.
pub const TRAY_SHAPE_SPACING: f64 = 50.0;

// ── HUD ─────────────────────────────────────────────────────────

/// Center x of the status column to the right of the board.
pub const HUD_CENTER_X: f64 = BOARD_EXTENT_PX + (SCREEN_WIDTH - BOARD_EXTENT_PX) / 2.0;

/// Baseline y of the header text.
pub const HUD_HEADER_Y: f64 = 30.0;

/// Vertical distance between HUD rows.
pub const HUD_ROW_SPACING: f64 = 75.0;

/// Color swatch drawn to the right of a HUD row.
pub const HUD_SWATCH_OFFSET_X: f64 = 80.0;
pub const HUD_SWATCH_SIZE: f64 = 30.0;

// ── Colors (0xRRGGBB) ───────────────────────────────────────────

pub const COLOR_BACKGROUND: u32 = 0x11_11_11;
pub const COLOR_CLEAR: u32 = 0x00_00_00;
pub const COLOR_WHITE: u32 = 0xFF_00_00;
pub const COLOR_WHITE_BLOCK: u32 = 0x80_00_00;
pub const COLOR_BLACK: u32 = 0x00_00_FF;
pub const COLOR_BLACK_BLOCK: u32 = 0x00_00_80;
pub const COLOR_BOTH: u32 = 0x80_00_80;
pub const COLOR_CANDIDATE: u32 = 0x33_33_33;
