use sha2::Digest;

/// Fixed-width and CompactSize integer writers for any [`Digest`] engine.
///
/// Multi-byte fixed-width integers are fed big-endian; `update_varint` uses
/// Bitcoin's little-endian CompactSize encoding.
pub trait HasherExt: Digest {
    fn update_u8(&mut self, value: u8) {
        Digest::update(self, [value]);
    }

    fn update_u16_be(&mut self, value: u16) {
        Digest::update(self, value.to_be_bytes());
    }

    fn update_u32_be(&mut self, value: u32) {
        Digest::update(self, value.to_be_bytes());
    }

    fn update_varint(&mut self, value: u64) {
        match value {
            0..=0xfc => self.update_u8(value as u8),
            0xfd..=0xffff => {
                self.update_u8(0xfd);
                Digest::update(self, (value as u16).to_le_bytes());
            }
            0x1_0000..=0xffff_ffff => {
                self.update_u8(0xfe);
                Digest::update(self, (value as u32).to_le_bytes());
            }
            _ => {
                self.update_u8(0xff);
                Digest::update(self, value.to_le_bytes());
            }
        }
    }
}

impl<D: Digest> HasherExt for D {}
