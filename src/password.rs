//! Password jump index.
//!
//! The runtime's password screen matches button presses against stored
//! control-code sequences and, on a match, seeks the bank to the stored
//! offset. The wire format is fixed by the runtime:
//!
//! ```text
//! Index layout:
//!   0x00: entry count (u8)
//!   then per entry, no separators:
//!     one control-code byte per password character
//!     jump offset (u16 LE) - byte offset of the level's record in the bank
//! ```
//!
//! Entries carry no length delimiter; the runtime recognizes a complete
//! control-code sequence as it is typed. Do not "improve" this with length
//! prefixes.

use crate::error::ConvertError;

/// Most entries the 1-byte count can describe.
pub const MAX_PASSWORD_ENTRIES: usize = 255;

/// A level's password, positioned by its 0-based index among the levels
/// that made it into the bank.
#[derive(Debug, Clone)]
pub struct PasswordEntry {
    pub level_index: usize,
    pub password: String,
}

/// Map one password character to its runtime control code.
pub fn control_code(c: char) -> Result<u8, ConvertError> {
    let code = match c {
        'l' => 64,
        'r' => 72,
        'u' => 80,
        'd' => 88,
        'a' => 96,
        'b' => 104,
        'c' => 112,
        's' => 120,
        other => return Err(ConvertError::InvalidPasswordChar(other)),
    };
    Ok(code)
}

/// Running cumulative sums of record sizes: `offsets[i]` is the total
/// bytes occupied by records `0..=i`, i.e. the bank offset at which record
/// `i + 1` begins.
pub fn running_offsets(sizes: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for size in sizes {
        sum += size;
        offsets.push(sum);
    }
    offsets
}

/// Serialize the password jump index.
///
/// `record_sizes` are the total per-record sizes of every level packed
/// into the bank, in bank order; an entry whose `level_index` falls outside
/// them fails with `PasswordLevelOutOfRange`. A password on level 0 has no
/// preceding record to point past, so its offset is defined as 0 (start of
/// bank) and flagged with a warning.
pub fn build_password_index(
    entries: &[PasswordEntry],
    record_sizes: &[usize],
) -> Result<Vec<u8>, ConvertError> {
    if entries.len() > MAX_PASSWORD_ENTRIES {
        return Err(ConvertError::TooManyPasswords(entries.len()));
    }

    let offsets = running_offsets(record_sizes);

    let mut out = Vec::new();
    out.push(entries.len() as u8);

    for entry in entries {
        if entry.level_index >= record_sizes.len() {
            return Err(ConvertError::PasswordLevelOutOfRange {
                level_index: entry.level_index,
                level_count: record_sizes.len(),
            });
        }

        let offset = if entry.level_index == 0 {
            tracing::warn!("password on the first level; using bank offset 0");
            0
        } else {
            offsets[entry.level_index - 1]
        };

        for c in entry.password.chars() {
            out.push(control_code(c)?);
        }
        // bank capacity (16384) keeps every offset well inside u16
        out.extend_from_slice(&(offset as u16).to_le_bytes());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_codes() {
        let codes: Vec<u8> = "lrudabcs"
            .chars()
            .map(|c| control_code(c).unwrap())
            .collect();
        assert_eq!(codes, vec![64, 72, 80, 88, 96, 104, 112, 120]);
    }

    #[test]
    fn test_rejects_characters_outside_control_alphabet() {
        for c in ['e', 'L', '1', ' ', '#'] {
            assert!(matches!(
                control_code(c),
                Err(ConvertError::InvalidPasswordChar(got)) if got == c
            ));
        }
    }

    #[test]
    fn test_running_offsets_accumulate() {
        assert_eq!(running_offsets(&[11, 21, 31]), vec![11, 32, 63]);
        assert_eq!(running_offsets(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_running_offsets_are_non_decreasing_and_total() {
        let sizes = [11, 21, 31, 1, 256, 7];
        let offsets = running_offsets(&sizes);
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*offsets.last().unwrap(), sizes.iter().sum::<usize>());
    }

    #[test]
    fn test_serializes_entry_with_le_offset() {
        let entries = [PasswordEntry {
            level_index: 1,
            password: "lrud".into(),
        }];
        let bytes = build_password_index(&entries, &[11, 21, 31]).unwrap();
        // count, then l r u d codes, then cum[0] = 11 as LE u16
        assert_eq!(bytes, vec![1, 64, 72, 80, 88, 0x0B, 0x00]);
    }

    #[test]
    fn test_entries_concatenate_without_separators() {
        let entries = [
            PasswordEntry {
                level_index: 1,
                password: "ab".into(),
            },
            PasswordEntry {
                level_index: 2,
                password: "s".into(),
            },
        ];
        let bytes = build_password_index(&entries, &[11, 21, 31]).unwrap();
        assert_eq!(bytes, vec![2, 96, 104, 0x0B, 0x00, 120, 0x20, 0x00]);
    }

    #[test]
    fn test_first_level_password_points_at_bank_start() {
        let entries = [PasswordEntry {
            level_index: 0,
            password: "s".into(),
        }];
        let bytes = build_password_index(&entries, &[11, 21]).unwrap();
        assert_eq!(bytes, vec![1, 120, 0x00, 0x00]);
    }

    #[test]
    fn test_offset_spans_both_bytes() {
        // record sizes that push the second level's offset past 255
        let entries = [PasswordEntry {
            level_index: 1,
            password: "l".into(),
        }];
        let bytes = build_password_index(&entries, &[0x1234, 10]).unwrap();
        assert_eq!(bytes, vec![1, 64, 0x34, 0x12]);
    }

    #[test]
    fn test_empty_index_is_a_single_zero_count() {
        let bytes = build_password_index(&[], &[11]).unwrap();
        assert_eq!(bytes, vec![0]);
    }

    #[test]
    fn test_rejects_entry_past_the_packed_levels() {
        // an entry built against the pre-truncation sequence must not
        // index past the records actually in the bank
        let entries = [PasswordEntry {
            level_index: 2,
            password: "l".into(),
        }];
        assert!(matches!(
            build_password_index(&entries, &[11, 21]),
            Err(ConvertError::PasswordLevelOutOfRange {
                level_index: 2,
                level_count: 2,
            })
        ));
    }

    #[test]
    fn test_rejects_more_than_255_entries() {
        let entries: Vec<PasswordEntry> = (0..256)
            .map(|i| PasswordEntry {
                level_index: i,
                password: "l".into(),
            })
            .collect();
        let sizes = vec![2; 256];
        assert!(matches!(
            build_password_index(&entries, &sizes),
            Err(ConvertError::TooManyPasswords(256))
        ));
    }
}
