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

//! Group 1 ("grp01"), `gid` 00...01.
//!
//! Arbitrary test data generated from Intel(R) EPID 2.0 parameters.

use epid_types::{
    FqElemStr, Fq2ElemStr, G1ElemStr, G2ElemStr, GroupId, GroupPubKey,
};

pub mod member0;

/// Public key of group 1 (`gid` 00...01).
pub const GROUP_PUBLIC_KEY: GroupPubKey = GroupPubKey {
    gid: GroupId([
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ]),
    h1: G1ElemStr {
        x: FqElemStr([
            0xb3, 0x6f, 0xff, 0x81, 0xe2, 0x1b, 0x17, 0xeb, 0x3d, 0x75, 0x3d, 0x61,
            0x7e, 0x27, 0xb0, 0xcb, 0xd0, 0x6d, 0x8f, 0x9d, 0x64, 0xce, 0xe3, 0xce,
            0x43, 0x4c, 0x62, 0xfd, 0xb5, 0x80, 0xe0, 0x99,
        ]),
        y: FqElemStr([
            0x3a, 0x07, 0x56, 0x80, 0xe0, 0x88, 0x59, 0xa4, 0xfd, 0xb5, 0xb7, 0x9d,
            0xe9, 0x4d, 0xae, 0x9c, 0xee, 0x3d, 0x66, 0x42, 0x82, 0x45, 0x7e, 0x7f,
            0xd8, 0x69, 0x3e, 0xa1, 0x74, 0xf4, 0x59, 0xee,
        ]),
    },
    h2: G1ElemStr {
        x: FqElemStr([
            0xd2, 0x74, 0x2e, 0x9f, 0x63, 0xc2, 0x51, 0x8e, 0xd5, 0xdb, 0xca, 0x1c,
            0x54, 0x74, 0x10, 0x7b, 0xdc, 0x99, 0xed, 0x42, 0xd5, 0x5b, 0xa7, 0x04,
            0x29, 0x66, 0x61, 0x63, 0xbc, 0xdd, 0x7f, 0xe1,
        ]),
        y: FqElemStr([
            0x76, 0x5d, 0xc0, 0x6e, 0xe3, 0x14, 0xac, 0x72, 0x48, 0x12, 0x0a, 0xa6,
            0xe8, 0x5b, 0x08, 0x7b, 0xda, 0x3f, 0x51, 0x7d, 0xde, 0x4c, 0xea, 0xcb,
            0x93, 0xa5, 0x6e, 0xcc, 0xe7, 0x8e, 0x10, 0x84,
        ]),
    },
    w: G2ElemStr {
        x: Fq2ElemStr {
            c0: FqElemStr([
                0xbd, 0x19, 0x5a, 0x95, 0xe2, 0x0f, 0xca, 0x1c, 0x50, 0x71, 0x94, 0x51,
                0x40, 0x1b, 0xa5, 0xb6, 0x78, 0x87, 0x53, 0xf6, 0x6a, 0x95, 0xca, 0xc6,
                0x8d, 0xcd, 0x36, 0x88, 0x07, 0x28, 0xe8, 0x96,
            ]),
            c1: FqElemStr([
                0xca, 0x78, 0x11, 0x5b, 0xb8, 0x6a, 0xe7, 0xe5, 0xa6, 0x65, 0x7a, 0x68,
                0x15, 0xd7, 0x75, 0xf8, 0x24, 0x14, 0xcf, 0xd1, 0x0f, 0x6c, 0x56, 0xf5,
                0x22, 0xd9, 0xfd, 0xe0, 0xe2, 0xf4, 0xb3, 0xa1,
            ]),
        },
        y: Fq2ElemStr {
            c0: FqElemStr([
                0x90, 0x21, 0xa7, 0xe0, 0xe8, 0xb3, 0xc7, 0x25, 0xbc, 0x07, 0x72, 0x30,
                0x5d, 0xee, 0xf5, 0x6a, 0x89, 0x88, 0x46, 0xdd, 0x89, 0xc2, 0x39, 0x9c,
                0x0a, 0x3b, 0x58, 0x96, 0x57, 0xe4, 0xf3, 0x3c,
            ]),
            c1: FqElemStr([
                0x79, 0x51, 0x69, 0x36, 0x1b, 0xb6, 0xf7, 0x05, 0x5d, 0x0a, 0x88, 0xdb,
                0x1f, 0x3d, 0xea, 0xa2, 0xba, 0x6b, 0xf0, 0xda, 0x8e, 0x25, 0xc6, 0xad,
                0x83, 0x7d, 0x3e, 0x31, 0xee, 0x11, 0x40, 0xa9,
            ]),
        },
    },
};

/// Five-entry signature revocation list for group 1, version 0.
pub const SIG_RL_5_ENTRY: [u8; 664] = [
    // gid
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01,
    // version
    0x00, 0x00, 0x00, 0x00,
    // n2
    0x00, 0x00, 0x00, 0x05,
    // entry 0
    0x9c, 0xa5, 0xe5, 0xae, 0x5f, 0xae, 0x51, 0x59, 0x33, 0x35, 0x27, 0x0d,
    0x08, 0xb1, 0xbe, 0x5d, 0x69, 0x50, 0x84, 0xc5, 0xfe, 0xe2, 0x87, 0xea,
    0x2e, 0xef, 0xfa, 0xee, 0x67, 0xf2, 0xd8, 0x28, 0x56, 0x43, 0xc6, 0x94,
    0x67, 0xa6, 0x72, 0xf6, 0x41, 0x15, 0x04, 0x58, 0x42, 0x16, 0x88, 0x57,
    0x9d, 0xc7, 0x71, 0xd1, 0x0c, 0x84, 0x13, 0x0a, 0x90, 0x23, 0x18, 0x08,
    0xad, 0x7d, 0xfe, 0xf5, 0xc8, 0xae, 0xfc, 0x51, 0x40, 0xa7, 0xd1, 0x28,
    0xc2, 0x89, 0xb2, 0x6b, 0x4e, 0xb4, 0xc1, 0x55, 0x87, 0x98, 0xbd, 0x72,
    0xf9, 0xcf, 0x0d, 0x40, 0x15, 0xee, 0x32, 0x0c, 0xf3, 0x56, 0xc5, 0x0c,
    0x61, 0x9d, 0x4f, 0x7a, 0xb5, 0x2b, 0x16, 0xa9, 0xa3, 0x97, 0x38, 0xe2,
    0xdd, 0x3a, 0x33, 0xad, 0xf6, 0x7b, 0x68, 0x8b, 0x68, 0xcf, 0xa3, 0xd3,
    0x98, 0x37, 0xce, 0xec, 0xd1, 0xa8, 0x0c, 0x8b,
    // entry 1
    0x71, 0x8a, 0xb5, 0x01, 0x7f, 0x7c, 0x92, 0x9a, 0xa2, 0xc9, 0x81, 0x10,
    0xfe, 0xbf, 0x0c, 0x53, 0xa4, 0x43, 0xaf, 0x31, 0x74, 0x12, 0x25, 0x60,
    0x3e, 0xc0, 0x21, 0xe6, 0x63, 0x9a, 0xd2, 0x67, 0x2d, 0xb5, 0xd5, 0x82,
    0xc4, 0x49, 0x29, 0x51, 0x42, 0x8f, 0xe0, 0x0e, 0xd1, 0x73, 0x27, 0xf5,
    0x77, 0x16, 0x04, 0x40, 0x8a, 0x00, 0x0e, 0x3a, 0x5d, 0x37, 0x42, 0xd3,
    0x08, 0x40, 0xbd, 0x69, 0xf7, 0x5f, 0x74, 0x21, 0x50, 0xf4, 0xce, 0xfe,
    0xd9, 0xdd, 0x97, 0x6c, 0xa8, 0xa5, 0x60, 0x6b, 0xf8, 0x1b, 0xba, 0x02,
    0xb2, 0xca, 0x05, 0x44, 0x9b, 0xb1, 0x5e, 0x3a, 0xa4, 0x35, 0x7a, 0x51,
    0xfa, 0xcf, 0xa4, 0x04, 0xe9, 0xf3, 0xbf, 0x38, 0xd4, 0x24, 0x09, 0x52,
    0xf3, 0x58, 0x3d, 0x9d, 0x4b, 0xb3, 0x37, 0x4b, 0xec, 0x87, 0xe1, 0x64,
    0x60, 0x3c, 0xb6, 0xf7, 0x7b, 0xff, 0x40, 0x11,
    // entry 2
    0x6e, 0x22, 0xaa, 0x10, 0x84, 0x58, 0x8b, 0xff, 0xd8, 0x37, 0x08, 0xa9,
    0xe9, 0xdb, 0xf6, 0x1f, 0x69, 0x10, 0x95, 0x6c, 0xbf, 0x0d, 0x11, 0x48,
    0x6f, 0x1b, 0x3c, 0x62, 0x46, 0x13, 0x89, 0x13, 0x5f, 0xa1, 0x03, 0x62,
    0xed, 0x62, 0xdf, 0x3d, 0xbf, 0xcd, 0xb7, 0x41, 0x48, 0x81, 0x03, 0x9f,
    0x54, 0x0a, 0x0e, 0xb3, 0x35, 0xf9, 0xde, 0x24, 0xba, 0x6d, 0x4c, 0x7f,
    0xfc, 0xc1, 0xb4, 0xce, 0x6d, 0xa1, 0x73, 0x7c, 0xaa, 0x0b, 0xad, 0x02,
    0xd6, 0x37, 0x85, 0x0e, 0xbb, 0x48, 0x11, 0x38, 0xc4, 0xaa, 0x1b, 0x0f,
    0xcf, 0xc1, 0x9c, 0x26, 0xcc, 0x95, 0xc2, 0x5b, 0x49, 0x09, 0x3d, 0xe9,
    0x7d, 0xce, 0xc7, 0xa6, 0x04, 0x3e, 0x7c, 0x9e, 0x28, 0xde, 0x08, 0x11,
    0x0e, 0x61, 0x3b, 0xc0, 0x9c, 0x6b, 0x58, 0x23, 0xe6, 0x40, 0x7b, 0xbd,
    0xb8, 0x72, 0x0f, 0xe0, 0xee, 0xcf, 0xba, 0xb4,
    // entry 3
    0xc4, 0xff, 0xaf, 0x48, 0x15, 0xda, 0x60, 0x40, 0xcc, 0xd7, 0xf2, 0x68,
    0xf7, 0xe2, 0x70, 0x12, 0x8d, 0x15, 0xa5, 0xb7, 0xe6, 0x4c, 0x23, 0xea,
    0x4d, 0x8a, 0x51, 0x06, 0x67, 0x03, 0x4c, 0x83, 0x6f, 0x28, 0x67, 0xcf,
    0x63, 0x46, 0x3e, 0x8a, 0x45, 0x9f, 0xed, 0x1a, 0xde, 0xa7, 0xad, 0xb2,
    0x2b, 0x0f, 0x8b, 0xab, 0x7c, 0x70, 0xff, 0xc3, 0xa8, 0x6e, 0x8c, 0xaa,
    0xb1, 0xf6, 0x20, 0xe3, 0xb9, 0xf1, 0xc3, 0x3d, 0x05, 0x6a, 0x1e, 0x26,
    0x2d, 0xf4, 0x0d, 0xe4, 0x53, 0x63, 0x67, 0x23, 0x48, 0xa8, 0x01, 0xa8,
    0xee, 0xe1, 0x5f, 0x64, 0xe3, 0x2c, 0x71, 0xe2, 0x10, 0x82, 0x00, 0x52,
    0xd7, 0x74, 0x87, 0xff, 0x1c, 0x00, 0x19, 0xe6, 0x4d, 0x15, 0x91, 0x6d,
    0xf3, 0x38, 0x3b, 0xee, 0xf3, 0xd5, 0xd1, 0xc7, 0x6d, 0xd9, 0x8e, 0x55,
    0x70, 0x90, 0xb0, 0x0b, 0x3c, 0x4a, 0x67, 0x19,
    // entry 4
    0x4f, 0x98, 0x92, 0xf9, 0x18, 0x38, 0xf5, 0xb4, 0xf7, 0x2f, 0xa7, 0x21,
    0x71, 0x52, 0x27, 0xd0, 0x57, 0x4f, 0x9c, 0x30, 0x0e, 0xb2, 0x27, 0xce,
    0xd7, 0xb2, 0x9f, 0xc0, 0xf6, 0xc3, 0xb0, 0x7c, 0x40, 0x18, 0x75, 0x4a,
    0xde, 0xb0, 0x9f, 0x46, 0x8a, 0x5a, 0xeb, 0x4f, 0xcb, 0x5e, 0x60, 0xf5,
    0xca, 0xf4, 0x98, 0xaf, 0x62, 0x9b, 0x7e, 0x10, 0xda, 0xba, 0x2f, 0x47,
    0x64, 0xf2, 0xc0, 0x84, 0x19, 0x75, 0xe0, 0xe4, 0xff, 0x20, 0xda, 0x7d,
    0xe5, 0x0d, 0xc8, 0xf8, 0xe3, 0x83, 0x61, 0x19, 0x17, 0xf1, 0xa9, 0x1b,
    0xff, 0x39, 0x79, 0x88, 0x01, 0xfb, 0xe7, 0x23, 0xd2, 0xac, 0xe0, 0x49,
    0x12, 0x2a, 0x38, 0xb4, 0x7c, 0xc2, 0x1b, 0x88, 0x5f, 0x68, 0x32, 0x11,
    0xd9, 0xfd, 0xdc, 0x65, 0x02, 0xb3, 0x74, 0x2c, 0x13, 0xf2, 0xd8, 0xf1,
    0x45, 0xc5, 0xd1, 0xf4, 0xa3, 0x38, 0x81, 0x92,
];

/// Owned copy of [`SIG_RL_5_ENTRY`] that a test may modify freely.
pub fn sig_rl_5_entry_data() -> Vec<u8> {
    SIG_RL_5_ENTRY.to_vec()
}
