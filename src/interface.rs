//! The bus interface between the host and the SSD1305, abstracted as whole command-mode and
//! data-mode transactions so the framebuffer and command layers stay independent of the wiring.

pub trait DisplayInterface {
    /// Transmit an opcode and its argument bytes as one command-mode transaction.
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()>;
    /// Transmit display RAM bytes as one data-mode transaction.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), ()>;
}

pub mod spi {
    //! The SPI interface supports the "4-wire" interface of the driver, such that each word on the
    //! SPI bus is 8 bits and the D/C GPIO selects between command and data mode. The chip select
    //! GPIO brackets every transaction, matching modules that gate the bus per transfer.

    use hal::blocking::spi::Write;
    use hal::digital::v2::OutputPin;

    use super::DisplayInterface;

    pub struct SpiInterface<SPI, DC, CS> {
        /// The SPI master device connected to the SSD1305.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the SSD1305 (the fourth
        /// "wire" of "4-wire" mode).
        dc: DC,
        /// A GPIO output pin connected to the chip select pin of the SSD1305, asserted low for
        /// the duration of each transaction.
        cs: CS,
    }

    impl<SPI, DC, CS> SpiInterface<SPI, DC, CS>
    where
        SPI: Write<u8>,
        DC: OutputPin,
        CS: OutputPin,
    {
        /// Create a new SPI interface to communicate with the display driver. `spi` is the SPI
        /// master device, and `dc` and `cs` are the GPIO output pins connected to the D/C and
        /// chip select pins of the SSD1305.
        pub fn new(spi: SPI, dc: DC, cs: CS) -> Self {
            Self { spi, dc, cs }
        }

        fn write_transaction(&mut self, data_mode: bool, words: &[u8]) -> Result<(), ()> {
            if data_mode {
                self.dc.set_high().map_err(|_| ())?;
            } else {
                self.dc.set_low().map_err(|_| ())?;
            }
            self.cs.set_low().map_err(|_| ())?;
            let res = self.spi.write(words).map_err(|_| ());
            // Release the device even when the write failed.
            self.cs.set_high().map_err(|_| ())?;
            res
        }
    }

    impl<SPI, DC, CS> DisplayInterface for SpiInterface<SPI, DC, CS>
    where
        SPI: Write<u8>,
        DC: OutputPin,
        CS: OutputPin,
    {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()> {
            self.write_transaction(false, cmds)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), ()> {
            self.write_transaction(true, buf)
        }
    }
}
