//! DSF file reader implementation
//!
//! Loads a DSF file into memory, checks its header and parses the atom
//! tree. Atom payloads are not interpreted here; see `demi` and
//! `validation` for the DEM records.

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Cursor, SeekFrom};
use std::path::Path;

use crate::dsf::atom::parse_atoms;
use crate::dsf::constants::header;
use crate::dsf::errors::{DsfError, DsfResult};
use crate::dsf::types::DSF;
use crate::io::seekable::{self, SeekableReader};
use crate::utils::logger::Logger;

/// Reader for DSF scenery files
pub struct DsfReader<'a> {
    /// Logger instance
    logger: &'a Logger,
    /// Current file path
    current_file: Option<String>,
}

impl<'a> DsfReader<'a> {
    /// Creates a new DSF reader
    pub fn new(logger: &'a Logger) -> Self {
        DsfReader {
            logger,
            current_file: None,
        }
    }

    /// Path of the most recently loaded file
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// Loads a DSF file from the given path
    ///
    /// # Arguments
    /// * `filepath` - Path to the DSF file to load
    ///
    /// # Returns
    /// The parsed DSF with its atom tree
    pub fn load(&mut self, filepath: &str) -> DsfResult<DSF> {
        info!("Loading DSF file: {}", filepath);
        self.current_file = Some(filepath.to_string());

        let file = File::open(Path::new(filepath))?;
        let mut reader = BufReader::with_capacity(1024 * 1024, file);

        self.read(&mut reader)
    }

    /// Reads a DSF file from the given reader
    ///
    /// 1. Read the whole stream into memory
    /// 2. Check the cookie and version
    /// 3. Parse the atoms between the header and the MD5 footer
    pub fn read(&mut self, reader: &mut dyn SeekableReader) -> DsfResult<DSF> {
        debug!("DsfReader::read starting");

        let file_size = seekable::stream_len(reader)?;
        reader.seek(SeekFrom::Start(0))?;

        let mut data = Vec::with_capacity(usize::try_from(file_size).unwrap_or(0));
        reader.read_to_end(&mut data)?;
        debug!("Read {} bytes", data.len());

        let version = check_header(&data)?;

        if data.len() < header::SIZE + header::FOOTER_SIZE {
            return Err(DsfError::GenericError(format!(
                "File too short for a DSF footer: {} bytes",
                data.len()
            )));
        }
        let body_end = data.len() - header::FOOTER_SIZE;

        let atoms = parse_atoms(&data, header::SIZE..body_end)?;
        info!("Read {} top-level atoms from DSF file", atoms.len());

        self.logger.log(&format!(
            "Parsed DSF v{} ({} bytes, {} top-level atoms)",
            version,
            data.len(),
            atoms.len()
        ))?;

        Ok(DSF::new(data, version, atoms))
    }
}

/// Checks the file cookie and returns the DSF version
pub fn check_header(data: &[u8]) -> DsfResult<i32> {
    if data.starts_with(&header::SEVEN_ZIP_MAGIC) {
        return Err(DsfError::CompressedContainer);
    }

    if data.len() < header::SIZE || !data.starts_with(header::COOKIE) {
        return Err(DsfError::InvalidHeader);
    }

    let mut cursor = Cursor::new(&data[header::COOKIE.len()..header::SIZE]);
    let version = cursor.read_i32::<LittleEndian>()?;
    debug!("DSF version: {}", version);

    if version != header::VERSION {
        warn!("Unexpected DSF version {}", version);
        return Err(DsfError::UnsupportedVersion(version));
    }

    Ok(version)
}
