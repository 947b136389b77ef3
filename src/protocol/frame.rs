//! Fixed-size update frame.

use crate::error::FrameError;

use super::value::ValueEncoding;

/// Bytes per frame on the wire.
pub const FRAME_LEN: usize = 5;

/// Frame command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Digital channel changed level.
    Button = b'B',
    /// Analog channel reading inside a report window.
    Pot = b'P',
}

impl Command {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = FrameError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            b'B' => Ok(Self::Button),
            b'P' => Ok(Self::Pot),
            other => Err(FrameError::UnknownCommand(other)),
        }
    }
}

/// Sum of the four payload bytes, truncated to eight bits.
pub const fn checksum(command: u8, index: u8, data1: u8, data2: u8) -> u8 {
    command
        .wrapping_add(index)
        .wrapping_add(data1)
        .wrapping_add(data2)
}

/// One update, ready for the wire.  The checksum is computed at
/// construction and the fields cannot change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    command: Command,
    index: u8,
    data: [u8; 2],
    checksum: u8,
}

impl Frame {
    pub const fn new(command: Command, index: u8, data1: u8, data2: u8) -> Self {
        Self {
            command,
            index,
            data: [data1, data2],
            checksum: checksum(command.as_byte(), index, data1, data2),
        }
    }

    /// Digital level change: `data1` is 0/1, `data2` is unused (0).
    pub const fn button(index: u8, pressed: bool) -> Self {
        Self::new(Command::Button, index, pressed as u8, 0)
    }

    /// Analog reading, split per `encoding`.
    pub const fn pot(index: u8, raw: u16, encoding: ValueEncoding) -> Self {
        let (data1, data2) = encoding.encode(raw);
        Self::new(Command::Pot, index, data1, data2)
    }

    /// Validate five received bytes.
    pub fn from_bytes(bytes: [u8; FRAME_LEN]) -> Result<Self, FrameError> {
        let [command, index, data1, data2, actual] = bytes;
        let command = Command::try_from(command)?;
        let frame = Self::new(command, index, data1, data2);
        if frame.checksum != actual {
            return Err(FrameError::ChecksumMismatch {
                expected: frame.checksum,
                actual,
            });
        }
        Ok(frame)
    }

    pub const fn to_bytes(&self) -> [u8; FRAME_LEN] {
        [
            self.command.as_byte(),
            self.index,
            self.data[0],
            self.data[1],
            self.checksum,
        ]
    }

    pub const fn command(&self) -> Command {
        self.command
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    pub const fn data1(&self) -> u8 {
        self.data[0]
    }

    pub const fn data2(&self) -> u8 {
        self.data[1]
    }

    pub const fn checksum(&self) -> u8 {
        self.checksum
    }
}
