//! Integration tests against the fixture dataset.
//!
//! ## Fixture layout
//!
//! | Tile  | Contents                                                   |
//! |-------|------------------------------------------------------------|
//! | root  | `America/Adak` on both sides of the antimeridian           |
//! | `a`   | `Asia/Tokyo` multipolygon                                  |
//! | `ad`  | a second `Asia/Tokyo` polygon overlapping the first        |
//! | `adc` | `Asia/Singapore` and `Asia/Kuala_Lumpur`                   |
//! | `bb`  | `America/Los_Angeles` and `America/Vancouver` sharing lat 49, plus quadrant `a` covered by `America/Cambridge_Bay` |
//! | `cd`  | `Antarctica/McMurdo` west of the prime meridian            |
//! | `dc`  | `Antarctica/Troll` east of the prime meridian, `Antarctica/McMurdo` west |
//!
//! `b`, `c` and `d` only delegate.

mod clamping;
mod concurrency;
mod config;
mod lookup;
