use msr605::protocol::Command;
use msr605::protocol::frame;
use msr605::{Bpc, Bpi, Coercivity, LedColor, TrackNumber};

#[test]
fn every_command_frames_with_esc_prefix() {
    let commands = [
        Command::Reset,
        Command::ReadIso,
        Command::ReadRaw,
        Command::CommunicationTest,
        Command::RamTest,
        Command::SensorTest,
        Command::AllLedsOff,
        Command::AllLedsOn,
        Command::LedOn {
            color: LedColor::Green,
        },
        Command::GetCoercivity,
        Command::GetModel,
        Command::GetFirmware,
        Command::SetCoercivity {
            coercivity: Coercivity::Low,
        },
    ];
    for cmd in commands {
        let bytes = frame::encode(&cmd);
        assert_eq!(bytes[0], 0x1B, "{:?}", cmd);
        assert_eq!(bytes.len(), 2, "{:?} takes no parameters", cmd);
    }
}

#[test]
fn erase_select_byte_on_wire() {
    let bytes = frame::encode(&Command::Erase {
        track1: false,
        track2: true,
        track3: true,
    });
    assert_eq!(bytes, vec![0x1B, 0x63, 0b110]);
}

#[test]
fn set_bpi_density_byte_on_wire() {
    let bytes = frame::encode(&Command::SetBpi {
        track: TrackNumber::Two,
        bpi: Bpi::Bpi210,
    });
    assert_eq!(bytes, vec![0x1B, 0x62, 0xD2]);
}

#[test]
fn set_bpc_three_values_on_wire() {
    let bytes = frame::encode(&Command::SetBpc {
        track1: Bpc::new(6).unwrap(),
        track2: Bpc::new(5).unwrap(),
        track3: Bpc::new(8).unwrap(),
    });
    assert_eq!(bytes, vec![0x1B, 0x6F, 6, 5, 8]);
}

#[test]
fn write_iso_command_carries_data_block() {
    let cmd = Command::WriteIso {
        tracks: [b"%AB?C".to_vec(), Vec::new(), Vec::new()],
    };
    let bytes = frame::encode(&cmd);
    // ESC 'w' ESC 's' ESC tag payload ? FS
    assert_eq!(&bytes[..4], &[0x1B, 0x77, 0x1B, 0x73]);
    assert_eq!(&bytes[4..6], &[0x1B, 0x01]);
    assert_eq!(&bytes[6..11], b"%AB?C");
    assert_eq!(&bytes[11..], &[0x3F, 0x1C]);
}
