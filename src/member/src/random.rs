// Copyright 2026 The EPID Member Harness Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Randomness handed through to the member library.

use libc::{c_int, c_uint, c_void};
use rand_core::RngCore;
use std::marker::PhantomData;

/// Callback the member library draws random bits from. Returns zero on
/// success. `user_data` is the state registered next to the callback.
pub type BitSupplier =
    unsafe extern "C" fn(rand_data: *mut c_uint, num_bits: c_int, user_data: *mut c_void) -> c_int;

/// A supplier and its state, borrowed for `'r`.
///
/// The handle never calls the supplier; it only passes the pair to the
/// library at creation and keeps the borrow alive as long as the context.
pub struct RandomSource<'r> {
    supplier: BitSupplier,
    param: *mut c_void,
    _state: PhantomData<&'r mut ()>,
}

impl<'r> RandomSource<'r> {
    /// Draws from `rng` through a generic trampoline.
    pub fn from_rng<R: RngCore>(rng: &'r mut R) -> Self {
        RandomSource {
            supplier: supply_bits::<R>,
            param: rng as *mut R as *mut c_void,
            _state: PhantomData,
        }
    }

    /// Wraps a foreign supplier.
    ///
    /// # Safety
    ///
    /// `param` must stay valid for whatever `supplier` does with it for all
    /// of `'r`.
    pub unsafe fn from_raw(supplier: BitSupplier, param: *mut c_void) -> Self {
        RandomSource {
            supplier,
            param,
            _state: PhantomData,
        }
    }

    pub fn supplier(&self) -> BitSupplier {
        self.supplier
    }

    pub fn param(&self) -> *mut c_void {
        self.param
    }
}

// Fills ceil(num_bits / 8) bytes and clears the unused high bits of the last.
unsafe extern "C" fn supply_bits<R: RngCore>(
    rand_data: *mut c_uint,
    num_bits: c_int,
    user_data: *mut c_void,
) -> c_int {
    if rand_data.is_null() || user_data.is_null() || num_bits <= 0 {
        return -1;
    }
    let rng = &mut *(user_data as *mut R);
    let num_bytes = (num_bits as usize + 7) / 8;
    let out = std::slice::from_raw_parts_mut(rand_data as *mut u8, num_bytes);
    if rng.try_fill_bytes(out).is_err() {
        return -1;
    }
    let extra_bits = num_bits % 8;
    if extra_bits != 0 {
        out[num_bytes - 1] &= (1u8 << extra_bits) - 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draw(source: &RandomSource<'_>, words: &mut [c_uint], num_bits: c_int) -> c_int {
        unsafe { (source.supplier())(words.as_mut_ptr(), num_bits, source.param()) }
    }

    #[test]
    fn same_seed_same_bits() {
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(1);
        let mut a = [0 as c_uint; 8];
        let mut b = [0 as c_uint; 8];
        assert_eq!(draw(&RandomSource::from_rng(&mut rng_a), &mut a, 256), 0);
        assert_eq!(draw(&RandomSource::from_rng(&mut rng_b), &mut b, 256), 0);
        assert_eq!(a, b);
        assert_ne!(a, [0; 8]);
    }

    #[test]
    fn state_advances_between_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let source = RandomSource::from_rng(&mut rng);
        let mut first = [0 as c_uint; 4];
        let mut second = [0 as c_uint; 4];
        assert_eq!(draw(&source, &mut first, 128), 0);
        assert_eq!(draw(&source, &mut second, 128), 0);
        assert_ne!(first, second);
    }

    #[test]
    fn partial_byte_is_masked_and_rest_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = RandomSource::from_rng(&mut rng);
        let mut words = [c_uint::MAX; 2];
        assert_eq!(draw(&source, &mut words, 11), 0);
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
        assert_eq!(bytes[1] & 0xf8, 0);
        assert!(bytes[2..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = RandomSource::from_rng(&mut rng);
        let mut words = [0 as c_uint; 1];
        assert_ne!(draw(&source, &mut words, 0), 0);
        assert_ne!(draw(&source, &mut words, -8), 0);
        let ret = unsafe { (source.supplier())(std::ptr::null_mut(), 8, source.param()) };
        assert_ne!(ret, 0);
    }
}
