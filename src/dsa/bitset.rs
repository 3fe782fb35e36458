// byte-backed bit vector, one bit per wavelength channel
#[derive(Clone,Default)]
pub struct BitSet {
    size:usize,
    bytes:Vec<u8>
}

impl BitSet {
    pub fn new() -> Self {
        Self {size:0,bytes:vec![]}
    }
    pub fn with_capacity(capacity:usize) -> Self {
        if capacity == 0 {return Self::new()}
        let vec_capacity = capacity/8 + 1;
        Self {
            size:0,
            bytes:Vec::with_capacity(vec_capacity)
        }
    }
    // len bits, all cleared
    pub fn zeros(len:usize) -> Self {
        if len == 0 {return Self::new()}
        Self {
            size:len,
            bytes:vec![0;len.div_ceil(8)]
        }
    }
    pub fn len(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    pub fn push_bit(&mut self, bit:bool) {
        let byte_pos = self.size / 8;
        let pos_in_byte = self.size % 8;

        debug_assert!(byte_pos <= self.bytes.len());

        let mask = 1u8 << pos_in_byte;
        if let Some(byte) = self.bytes.get_mut(byte_pos) {
            if bit {
                *byte |= mask;
            }else{
                *byte &= !mask;
            }
        }else{
            self.bytes.push(if bit {mask} else {0})
        }
        self.size += 1;
    }
    pub fn get_at(&self,index:usize) -> Option<bool> {
        if index >= self.size {return None}
        let byte_pos = index / 8;
        let pos_in_byte = index % 8;
        let byte = self.bytes.get(byte_pos)?;
        let mask = 1u8 << pos_in_byte;
        Some(*byte & mask > 0)
    }
    pub fn store_at(&mut self,index:usize,bit:bool) -> Option<()> {
        if index >= self.size {return None}
        let byte_pos = index / 8;
        let pos_in_byte = index % 8;
        let byte = self.bytes.get_mut(byte_pos)?;
        let mask = 1u8 << pos_in_byte;
        if bit {
            *byte |= mask;
        }else{
            *byte &= !mask;
        }
        Some(())
    }
    // unused tail bits of the last byte are always kept at zero, so a popcount is exact
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }
    pub fn first_one(&self) -> Option<usize> {
        self.iter().position(|bit| bit)
    }
    pub fn clear(&mut self) {
        for byte in self.bytes.iter_mut() {
            *byte = 0;
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.size).map(|i| {
            let byte = self.bytes[i / 8];
            byte & (1u8 << (i % 8)) > 0
        })
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for BitSet {}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,"[")?;
        for bit in self.iter() {
            write!(f,"{}",if bit {1} else {0})?;
        }
        write!(f,"]")
    }
}

impl FromIterator<bool> for BitSet {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        for bit in iter {
            set.push_bit(bit);
        }
        set
    }
}
