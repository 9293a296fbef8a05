pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * 1024;

pub const DEFAULT_BLOCK_SIZE: usize = MIB as usize;
pub const DEFAULT_OVERLAP: usize = 4 * KIB as usize;
/// Smallest accepted overlap. Must cover the longest `https://www.` + host +
/// TLD head a match can have, so a straddling URL is never committed with its
/// host cut off.
pub const MIN_OVERLAP: usize = 512;

/// Candidates of this many characters or fewer are never valid links.
pub const MIN_URL_CHARS: usize = 10;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "bmp", "gif"];
pub const VIDEO_EXTENSIONS: [&str; 3] = ["webm", "mp4", "mkv"];

// Viewport geometry used to derive how many rows fit on one page.
pub const ROW_HEIGHT: u32 = 14;
pub const VIEWPORT_MARGIN: u32 = 2;
pub const MIN_VIEWPORT_HEIGHT: u32 = 40;
pub const SMALL_VIEWPORT_CAPACITY: usize = 2;
