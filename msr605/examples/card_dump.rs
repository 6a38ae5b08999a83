//! Read one card and print its tracks.
//!
//! `cargo run --example card_dump --features serial -- /dev/ttyUSB0`

#[cfg(feature = "serial")]
fn main() -> anyhow::Result<()> {
    use msr605::device::Device;
    use msr605::transport::SerialTransport;
    use msr605::TrackFormat;

    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let transport = SerialTransport::open(&path)?;
    let mut dev = Device::new_with_transport(Box::new(transport)).open()?;

    println!("device: {}", dev.device_model()?);
    println!("firmware: {}", dev.firmware_version()?);
    println!("swipe a card...");

    match dev.read(TrackFormat::Iso) {
        Ok(tracks) => {
            for track in &tracks {
                println!("track {}: {:?}", track.number, track.content_lossy());
            }
        }
        Err(err) => eprintln!("read failed: {}", err),
    }

    dev.close()?;
    Ok(())
}

#[cfg(not(feature = "serial"))]
fn main() {
    eprintln!("rebuild with --features serial to talk to a device");
}
