use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use super::glyphs;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;
pub const CONTENT_TYPE: &str = "image/png";

const BACKGROUND_FROM: Rgb<u8> = Rgb([0x1C, 0x19, 0x17]);
const BACKGROUND_TO: Rgb<u8> = Rgb([0x29, 0x25, 0x24]);
const TITLE: Rgb<u8> = Rgb([0xFA, 0xFA, 0xF9]);
const ACCENT: Rgb<u8> = Rgb([0xD9, 0x77, 0x06]);
const MUTED: Rgb<u8> = Rgb([0xA8, 0xA2, 0x9E]);

const RULE_WIDTH: u32 = 120;
const RULE_HEIGHT: u32 = 2;
const GEM_RADIUS: u32 = 12;
const GEM_GAP: u32 = 40;

enum Block {
    Text {
        text: &'static str,
        scale: u32,
        tracking: u32,
        color: Rgb<u8>,
    },
    Rule,
    Gems,
}

impl Block {
    fn height(&self) -> u32 {
        match self {
            Block::Text { scale, .. } => glyphs::HEIGHT * scale,
            Block::Rule => RULE_HEIGHT,
            Block::Gems => GEM_RADIUS * 2 + 1,
        }
    }
}

/// Block and the space below it.
const LAYOUT: [(Block, u32); 5] = [
    (
        Block::Text {
            text: "MULYAM",
            scale: 10,
            tracking: 22,
            color: TITLE,
        },
        20,
    ),
    (Block::Rule, 30),
    (
        Block::Text {
            text: "Fashion Jewelry",
            scale: 4,
            tracking: 2,
            color: ACCENT,
        },
        20,
    ),
    (
        Block::Text {
            text: "For Women, Kids & Pets",
            scale: 3,
            tracking: 1,
            color: MUTED,
        },
        40,
    ),
    (Block::Gems, 0),
];

/// Renders the social preview card shared by OpenGraph and Twitter.
pub fn render_preview() -> Result<Vec<u8>, image::ImageError> {
    let mut img = RgbImage::from_fn(WIDTH, HEIGHT, |x, y| {
        let t = (x + y) as f32 / (WIDTH + HEIGHT - 2) as f32;
        lerp(BACKGROUND_FROM, BACKGROUND_TO, t)
    });

    let total: u32 = LAYOUT.iter().map(|(block, gap)| block.height() + gap).sum();
    let mut top = (HEIGHT - total) / 2;

    for (block, gap) in &LAYOUT {
        match block {
            Block::Text {
                text,
                scale,
                tracking,
                color,
            } => draw_text(&mut img, text, top, *scale, *tracking, *color),
            Block::Rule => fill_rect(
                &mut img,
                (WIDTH - RULE_WIDTH) / 2,
                top,
                RULE_WIDTH,
                RULE_HEIGHT,
                ACCENT,
            ),
            Block::Gems => {
                let center_y = top + GEM_RADIUS;
                for offset in [-1i64, 0, 1] {
                    let center_x = (WIDTH / 2) as i64 + offset * (GEM_RADIUS * 2 + GEM_GAP) as i64;
                    draw_gem(&mut img, center_x as u32, center_y, ACCENT);
                }
            }
        }

        top += block.height() + gap;
    }

    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, ImageFormat::Png)?;

    Ok(png.into_inner())
}

fn lerp(from: Rgb<u8>, to: Rgb<u8>, t: f32) -> Rgb<u8> {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;

    Rgb([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ])
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    for py in y..(y + height).min(img.height()) {
        for px in x..(x + width).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

fn text_width(text: &str, scale: u32, tracking: u32) -> u32 {
    let count = text.chars().filter(|c| glyphs::glyph(*c).is_some()).count() as u32;
    if count == 0 {
        return 0;
    }

    count * glyphs::WIDTH * scale + (count - 1) * (scale + tracking)
}

/// Draws `text` horizontally centered with its top edge at `top`.
fn draw_text(img: &mut RgbImage, text: &str, top: u32, scale: u32, tracking: u32, color: Rgb<u8>) {
    let width = text_width(text, scale, tracking);
    let mut left = WIDTH.saturating_sub(width) / 2;

    for rows in text.chars().filter_map(glyphs::glyph) {
        for gy in 0..glyphs::HEIGHT {
            for gx in 0..glyphs::WIDTH {
                if glyphs::is_set(&rows, gx, gy) {
                    fill_rect(img, left + gx * scale, top + gy * scale, scale, scale, color);
                }
            }
        }

        left += glyphs::WIDTH * scale + scale + tracking;
    }
}

fn draw_gem(img: &mut RgbImage, center_x: u32, center_y: u32, color: Rgb<u8>) {
    let r = GEM_RADIUS as i64;

    for dy in -r..=r {
        for dx in -r..=r {
            if dx.abs() + dy.abs() > r {
                continue;
            }

            let x = center_x as i64 + dx;
            let y = center_y as i64 + dy;
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
