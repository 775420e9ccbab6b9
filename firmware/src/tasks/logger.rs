/*
* Logger Task
*   Drains the telemetry channel and prints one line per record over the USB logger
*/

use super::*;

use embassy_rp::usb::Driver;
use embassy_rp::peripherals::USB;

/* --------------------------- Code -------------------------- */
#[embassy_executor::task]
pub async fn usb_logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, log::LevelFilter::Info, driver);
}

#[embassy_executor::task]
pub async fn firmware_logger_task() {
    let mut buffer = heapless::String::<LOG_LINE_SIZE>::new();

    loop {
        let data: LogData = LOG_CHANNEL.receive().await;

        match data.write_to_buffer(&mut buffer) {
            Ok(()) => log::info!("{}", buffer),
            Err(_) => defmt::warn!("Telemetry line truncated"),
        }
    }
}
