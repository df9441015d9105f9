// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub trait SafeConvert<T>: Sized {
	fn checked_convert(self) -> Option<T>;
}

macro_rules! impl_safe_convert_demote {
	($from:ty => $($to:ty),* $(,)?) => {
		$(
			impl SafeConvert<$to> for $from {
				fn checked_convert(self) -> Option<$to> {
					<$to>::try_from(self).ok()
				}
			}
		)*
	};
}

impl_safe_convert_demote!(i128 => i8, i16, i32, i64, u8, u16, u32, u64);
