//! SH1106 OLED Display Driver
//!
//! Driver for 128x64 SH1106-based OLED displays via I2C. Drawing goes to
//! a page-organised frame buffer through `embedded-graphics`; `flush`
//! pushes the buffer to the panel.
//!
//! Layout:
//! - Header bar: rows 0-9, inverted, 5x8 font
//! - Description: rows 10-53, 4x6 font (body) or 5x8 font (title)
//! - Footer bar: rows 54-63, inverted, 5x8 font

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::{FONT_4X6, FONT_5X8};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use limber_core::layout::{BAR_COLS, BODY_COLS, BODY_LINES, TITLE_COLS, TITLE_LINES};
use limber_core::{Region, TextStyle};
use limber_display::{DisplayBackend, DisplayError, Grid};

/// SH1106 I2C address (typically 0x3C or 0x3D)
const SH1106_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// The 128 visible columns start at RAM column 2
const COLUMN_OFFSET: u8 = 2;

const BAR_HEIGHT: u32 = 10;
const HEADER_TOP: i32 = 0;
const DESCRIPTION_TOP: i32 = BAR_HEIGHT as i32;
const DESCRIPTION_HEIGHT: u32 = HEIGHT as u32 - 2 * BAR_HEIGHT;
const FOOTER_TOP: i32 = HEIGHT as i32 - BAR_HEIGHT as i32;

/// Bar text and title text
const LARGE_FONT: MonoFont<'static> = FONT_5X8;
/// Pose descriptions
const SMALL_FONT: MonoFont<'static> = FONT_4X6;

/// Whole characters per line, keeping one pixel free at each edge
const fn cols_of(font: &MonoFont<'static>) -> u32 {
    (WIDTH as u32 - 2) / font.character_size.width
}

const fn lines_of(font: &MonoFont<'static>) -> u32 {
    DESCRIPTION_HEIGHT / font.character_size.height
}

// The catalog limits in limber-core assume this panel's grid
const _: () = assert!(cols_of(&LARGE_FONT) as usize == BAR_COLS);
const _: () = assert!(cols_of(&SMALL_FONT) as usize == BODY_COLS);
const _: () = assert!(lines_of(&SMALL_FONT) as usize == BODY_LINES);
const _: () = assert!(cols_of(&LARGE_FONT) as usize == TITLE_COLS);
const _: () = assert!(lines_of(&LARGE_FONT) as usize == TITLE_LINES);

/// SH1106 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

fn font(region: Region, style: TextStyle) -> &'static MonoFont<'static> {
    match (region, style) {
        (Region::Description, TextStyle::Body) => &SMALL_FONT,
        _ => &LARGE_FONT,
    }
}

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
    initialized: bool,
}

impl<I2C> Sh1106<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new SH1106 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
            initialized: false,
        }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,                  // Enable charge pump
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SH1106_ADDR, &[0x00, cmd])
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Flush the frame buffer to the display
    pub async fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | (page as u8)).await?;
            self.command(cmd::SET_LOW_COLUMN | COLUMN_OFFSET).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c
                .write(SH1106_ADDR, &data)
                .await
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let bit = 1u8 << (y % 8);
        let cell = &mut self.buffer[y / 8][x];
        if on {
            *cell |= bit;
        } else {
            *cell &= !bit;
        }
    }
}

impl<I2C> OriginDimensions for Sh1106<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Sh1106<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x < WIDTH && y < HEIGHT {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

impl<I2C> DisplayBackend for Sh1106<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn grid(&self, region: Region, style: TextStyle) -> Grid {
        let font = font(region, style);
        let lines = match region {
            Region::Description => lines_of(font),
            Region::Header | Region::Footer => 1,
        };
        Grid {
            cols: cols_of(font) as u8,
            lines: lines as u8,
        }
    }

    fn fill_region(&mut self, region: Region) -> Result<(), DisplayError> {
        let top = match region {
            Region::Header => HEADER_TOP,
            Region::Footer => FOOTER_TOP,
            Region::Description => return Ok(()),
        };

        let bar = Rectangle::new(Point::new(0, top), Size::new(WIDTH as u32, BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On));
        let _ = bar.draw(self);
        Ok(())
    }

    fn draw_line(
        &mut self,
        region: Region,
        line: u8,
        col: u8,
        text: &str,
        style: TextStyle,
    ) -> Result<(), DisplayError> {
        let grid = self.grid(region, style);
        if line >= grid.lines || col >= grid.cols {
            return Err(DisplayError::InvalidCoordinates);
        }

        let font = font(region, style);
        let char_width = font.character_size.width as i32;
        let line_height = font.character_size.height as i32;
        let margin_x = (WIDTH as i32 - grid.cols as i32 * char_width) / 2;
        let (top, color) = match region {
            Region::Header => (HEADER_TOP + 1, BinaryColor::Off),
            Region::Footer => (FOOTER_TOP + 1, BinaryColor::Off),
            Region::Description => (DESCRIPTION_TOP, BinaryColor::On),
        };

        let origin = Point::new(
            margin_x + col as i32 * char_width,
            top + line as i32 * line_height,
        );
        let text_style = MonoTextStyle::new(font, color);
        let _ = Text::with_baseline(text, origin, text_style, Baseline::Top).draw(self);
        Ok(())
    }
}
