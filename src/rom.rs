use std::fmt;
use std::path::Path;

const HEADER_SIZE: usize = 16;
const MAGIC_NUMBERS: &[u8; 4] = b"NES\x1a";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MapperType {
    Nrom = 0,
    Mmc1 = 1,
    Uxrom = 2,
    Cnrom = 3,
    Mmc3 = 4,
    Unknown,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mirroring {
    Vertical,
    Horizontal,
    FourScreen,
}

/// Failures that can occur loading or validating a cartridge image. Only NROM
/// is supported; anything else is reported, not silently coerced.
#[derive(Debug, Clone)]
pub enum RomError {
    Io(String),
    Truncated { expected: usize, got: usize },
    BadMagic,
    UnsupportedMapper { id: u8, mapper: MapperType },
    BadPrgSize { units: u8 },
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomError::Io(msg) => write!(f, "failed to read ROM file: {}", msg),
            RomError::Truncated { expected, got } => {
                write!(f, "ROM data truncated: expected at least {} bytes, got {}", expected, got)
            }
            RomError::BadMagic => write!(f, "file is not in iNES format (bad magic number)"),
            RomError::UnsupportedMapper { id, mapper } => {
                write!(f, "mapper {} ({:?}) is not supported", id, mapper)
            }
            RomError::BadPrgSize { units } => {
                write!(f, "invalid NROM PRG size: {} units (must be 1 or 2)", units)
            }
        }
    }
}

impl std::error::Error for RomError {}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct NesHeader {
    pub magic_numbers: [u8; 4],
    pub prg_rom_size: u8,
    pub chr_rom_size: u8,
    pub flags_6: u8,
    pub flags_7: u8,
    pub prg_ram_size: u8,
    pub flags_9: u8,
    pub flags_10: u8,
    pub reserved: [u8; 5],
}

/// A parsed iNES cartridge image. Only mapper 0 (NROM) is supported; see
/// `check_validity`.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Rom {
    pub header: NesHeader,
    pub mirroring: Mirroring,
    pub mapper: u8,
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
}

impl Rom {
    /// Reads an iNES file from disk and parses it, running the same validity
    /// check the CLI entry point relies on.
    pub fn load(path: impl AsRef<Path>) -> Result<Rom, RomError> {
        let data = std::fs::read(path).map_err(|e| RomError::Io(e.to_string()))?;
        let rom = Self::parse_nes_rom(data)?;
        rom.check_validity()?;
        Ok(rom)
    }

    pub fn parse_nes_rom(rom_data: Vec<u8>) -> Result<Rom, RomError> {
        if rom_data.len() < HEADER_SIZE {
            return Err(RomError::Truncated { expected: HEADER_SIZE, got: rom_data.len() });
        }
        if &rom_data[0..4] != MAGIC_NUMBERS {
            return Err(RomError::BadMagic);
        }

        let header = NesHeader {
            magic_numbers: [rom_data[0], rom_data[1], rom_data[2], rom_data[3]],
            prg_rom_size: rom_data[4],
            chr_rom_size: rom_data[5],
            flags_6: rom_data[6],
            flags_7: rom_data[7],
            prg_ram_size: rom_data[8],
            flags_9: rom_data[9],
            flags_10: rom_data[10],
            reserved: [rom_data[11], rom_data[12], rom_data[13], rom_data[14], rom_data[15]],
        };

        // Bits 4-7 of byte 6 are the lower nibble of the mapper, bits 4-7 of byte 7 the upper.
        let mapper = (header.flags_7 & 0b1111_0000) | (header.flags_6 >> 4);

        let has_trainer = (header.flags_6 & 0b0000_0100) != 0;
        let four_screen = (header.flags_6 & 0b0000_1000) != 0;
        let mirrored = (header.flags_6 & 0b0000_0001) != 0;

        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if mirrored {
            Mirroring::Horizontal
        } else {
            Mirroring::Vertical
        };

        let prg_rom_start = HEADER_SIZE + if has_trainer { 512 } else { 0 };
        let prg_rom_len = header.prg_rom_size as usize * 16384;
        let chr_rom_start = prg_rom_start + prg_rom_len;
        let chr_rom_len = header.chr_rom_size as usize * 8192;

        let needed = chr_rom_start + chr_rom_len;
        if rom_data.len() < needed {
            return Err(RomError::Truncated { expected: needed, got: rom_data.len() });
        }

        Ok(Rom {
            header,
            prg_rom: rom_data[prg_rom_start..(prg_rom_start + prg_rom_len)].to_vec(),
            chr_rom: rom_data[chr_rom_start..(chr_rom_start + chr_rom_len)].to_vec(),
            mirroring,
            mapper,
        })
    }

    pub fn get_mapper_type(&self) -> MapperType {
        match self.mapper {
            0 => MapperType::Nrom,
            1 => MapperType::Mmc1,
            2 => MapperType::Uxrom,
            3 => MapperType::Cnrom,
            4 => MapperType::Mmc3,
            _ => MapperType::Unknown,
        }
    }

    /// NROM-only sanity check: PRG ROM must be 16KB or 32KB. Any other mapper
    /// is rejected outright rather than half-supported.
    pub fn check_validity(&self) -> Result<(), RomError> {
        match self.get_mapper_type() {
            MapperType::Nrom => {
                if self.header.prg_rom_size != 1 && self.header.prg_rom_size != 2 {
                    return Err(RomError::BadPrgSize { units: self.header.prg_rom_size });
                }
                Ok(())
            }
            other => Err(RomError::UnsupportedMapper { id: self.mapper, mapper: other }),
        }
    }

    /// Reads PRG ROM at a bus-relative offset (0-based from 0x8000), mirroring
    /// a 16KB image into the upper half of the cartridge window.
    pub fn read_prg(&self, mut addr: u16) -> u8 {
        if self.prg_rom.len() == 16384 {
            addr %= 16384;
        }
        self.prg_rom[addr as usize]
    }

    #[allow(dead_code)]
    pub fn test_rom() -> Rom {
        let header = NesHeader {
            magic_numbers: [0x4E, 0x45, 0x53, 0x1A],
            prg_rom_size: 1,
            chr_rom_size: 1,
            flags_6: 0,
            flags_7: 0,
            prg_ram_size: 0,
            flags_9: 0,
            flags_10: 0,
            reserved: [0; 5],
        };

        let prg_data = vec![0xEA; 16384];
        let chr_data = vec![0x00; 8192];

        Rom {
            header,
            mirroring: Mirroring::Horizontal,
            mapper: 0,
            prg_rom: prg_data,
            chr_rom: chr_data,
        }
    }
}
