#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use core::fmt::Write as _;

use hal::{
    i2c::{BlockingI2c, Mode as I2cMode},
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use linebot::config;
use linebot::control::{LineFollower, Pi};
use linebot::drivers::{motor_shield, MotorShield, Qtr5, ShieldMotor, WheelDrive};
use linebot::hw::{pins::QTR_CHANNELS, Adc, BoardPins, Console, Led};
use linebot::motors::SpeedMapper;
use linebot::sensors::{LineClassifier, LineState};

/// Cycles per millisecond at the 16 MHz HSI boot clock.
const CYCLES_PER_MS: u32 = 16_000;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb1 = rcc.apb1;

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC);

    // LEDs
    let mut heartbeat = Led::new(pins.leds.heartbeat);
    let mut fault_led = Led::new(pins.leds.fault);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let mut console = Console::new(serial);

    // I2C1 to the motor shield
    let i2c = BlockingI2c::i2c1(
        dp.I2C1,
        (pins.i2c1.scl, pins.i2c1.sda),
        I2cMode::standard(100.kHz()),
        clocks,
        &mut apb1,
        10_000,
    );

    let mut shield = MotorShield::new(i2c, motor_shield::DEFAULT_ADDRESS);
    while shield.init().is_err() {
        // Shield unreachable; retry until the bus comes up
        fault_led.on();
        cortex_m::asm::delay(100 * CYCLES_PER_MS);
    }
    fault_led.off();
    let mut drive = WheelDrive::new(shield, ShieldMotor::M4, ShieldMotor::M1);

    // Reflectance array
    let mut qtr = Qtr5::new(Adc::adc1(dp.ADC1), QTR_CHANNELS, pins.qtr.emitter);

    let mut follower = LineFollower::new(
        Pi::new(config::KP, config::KI).with_integral_limit(config::HIGHEST_INTEGRAL),
        LineClassifier::new(),
        SpeedMapper::new(config::DEFAULT_SPEED, config::BACKWARDS_LIMIT),
        config::DETECT_THRESHOLD,
    );

    console.println("linebot up, following");

    let mut consecutive_faults: u8 = 0;
    loop {
        heartbeat.toggle();

        match follower.tick(&mut qtr, &mut drive) {
            Ok(report) => {
                if report.sensor_fault {
                    fault_led.on();
                    consecutive_faults = consecutive_faults.saturating_add(1);
                    if consecutive_faults >= config::SENSOR_FAULT_LIMIT {
                        break;
                    }
                } else {
                    fault_led.off();
                    consecutive_faults = 0;
                    if report.changed {
                        let _ = writeln!(console, "state: {:?}\r", report.state);
                        if report.state == LineState::Station {
                            console.print("stations: ");
                            console.print_dec(follower.stations_passed() as i32);
                            console.print("\r\n");
                        }
                    }
                }
            }
            Err(_) => {
                // Shield write failed; flag it and retry next tick
                fault_led.on();
            }
        }

        cortex_m::asm::delay(config::TICK_PERIOD_MS * CYCLES_PER_MS);
    }

    // Sensor row persistently dead. The wheels were commanded neutral on
    // every fault tick; park with the fault light latched.
    console.println("sensor row dead, parked");
    fault_led.on();
    loop {
        cortex_m::asm::nop();
    }
}
