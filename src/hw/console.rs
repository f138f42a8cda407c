// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TX-only debug console over a USART.
//!
//! The tick loop prints state transitions and telemetry here. When using
//! `writeln!`, include `\r` in the format string so the terminal sees CRLF
//! line endings.
//!
//! On the host, attach with `screen /dev/tty.usbmodem* 115200`.

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Console<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Console<U> {
    /// Take the TX half of a configured serial port; RX is discarded.
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    fn putc(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn print(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.putc(b);
        }
    }

    /// Print a line with CRLF terminator.
    pub fn println(&mut self, s: &str) {
        self.print(s);
        self.print("\r\n");
    }

    /// Signed decimal, for position errors and station counts.
    pub fn print_dec(&mut self, n: i32) {
        if n < 0 {
            self.putc(b'-');
        }
        let mut n = n.unsigned_abs();
        let mut buf = [0u8; 10];
        let mut i = buf.len();
        loop {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for &b in &buf[i..] {
            self.putc(b);
        }
    }
}

// `write!` / `writeln!` support.
impl<U: Instance> fmt::Write for Console<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}
