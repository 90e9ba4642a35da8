//! Full example code for setting up an SSD1305 display. This runs on an STM32F303RE, using a
//! DENSITRON DD-12864YO-3A connected to SPI1, PA8 for C/S, PA9 for D/C, and PA10 for /RESET.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate embedded_hal as hal_api;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;
extern crate ssd1305;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use hal::spi;
use ssd1305 as oled;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

// A glyph table would normally be generated offline and cover a full ASCII range; this one
// carries just the two characters the example draws.
static GLYPH_O: [u8; 6] = [5, 0x3E, 0x41, 0x41, 0x41, 0x3E];
static GLYPH_P: [u8; 6] = [5, 0x7F, 0x09, 0x09, 0x09, 0x06];
static GLYPHS: [&[u8]; 2] = [&GLYPH_O, &GLYPH_P];

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO A where the display is connected.
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);

    // Set up SPI1, which is Alternate Function 5 for GPIOs PA5,6,7.
    let disp_sck = gpioa.pa5.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_miso = gpioa.pa6.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_mosi = gpioa.pa7.into_af5(&mut gpioa.moder, &mut gpioa.afrl);

    let disp_spi = spi::Spi::spi1(
        dp.SPI1,
        (disp_sck, disp_miso, disp_mosi),
        hal_api::spi::Mode {
            polarity: hal_api::spi::Polarity::IdleHigh,
            phase: hal_api::spi::Phase::CaptureOnSecondTransition,
        },
        2.mhz(),
        clocks,
        &mut rcc.apb2,
    );

    // PA8 is the chip select, PA9 the D/C push-pull output for the 4th wire.
    let disp_cs = gpioa
        .pa8
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let disp_dc = gpioa
        .pa9
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // PA10 is the display's /RESET pin. The ssd1305 library does not control this pin; we will
    // assert reset separately.
    let mut disp_rst = gpioa
        .pa10
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // Create the SpiInterface and Display.
    let mut disp = oled::Display::new(oled::SpiInterface::new(disp_spi, disp_dc, disp_cs));

    // Assert the display's /RESET for 10ms.
    disp_rst.set_low();
    delay.delay_ms(10_u16);
    disp_rst.set_high();

    // Initialize the display. These parameters are taken from the Densitron datasheet for the
    // DD-12864YO-3A.
    disp.init(
        oled::Config::new(
            oled::SegmentRemap::Reverse,
            oled::ComScanDirection::RowZeroLast,
        )
        .clock_fosc_divset(10, 0)
        .master_config(oled::command::VccSource::External)
        .area_color_mode(oled::command::AreaColorMode::LowPower)
        .com_pins_config(true, false)
        .current_drive_lut(0x3F, 0x3F, 0x3F, 0x3F)
        .contrast(0x8F)
        .precharge_period(2, 13)
        .vcomh_deselect_level(0x34),
    )
    .unwrap();

    // Draw a ruled header row reading "OP" and put it on the panel.
    let mut frame = oled::FrameBuffer::new();
    frame.set_font(oled::Font::new(b'O', b'P', &GLYPHS));
    frame.draw_text("OP", 0);
    frame.draw_horizontal_line(9);
    disp.flush(&mut frame).unwrap();

    loop {
        asm::wfi();
    }
}
