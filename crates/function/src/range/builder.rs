// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::{BitVec, ColumnData, ListContainer, NumberContainer};
use ranger_type::{IntegerType, value::is::IsInt};
use rayon::prelude::*;
use tracing::trace;

use crate::range::spec::RangeSpec;

macro_rules! dispatch {
	($dtype:expr, $func:ident($($arg:expr),*)) => {
		match $dtype {
			IntegerType::Int1 => $func::<i8>($($arg),*),
			IntegerType::Int2 => $func::<i16>($($arg),*),
			IntegerType::Int4 => $func::<i32>($($arg),*),
			IntegerType::Int8 => $func::<i64>($($arg),*),
			IntegerType::Uint1 => $func::<u8>($($arg),*),
			IntegerType::Uint2 => $func::<u16>($($arg),*),
			IntegerType::Uint4 => $func::<u32>($($arg),*),
			IntegerType::Uint8 => $func::<u64>($($arg),*),
		}
	};
}

/// Materializes one range into a flat column of its dtype
pub fn flat_column(spec: &RangeSpec) -> ColumnData {
	dispatch!(spec.dtype, flat(spec))
}

/// Materializes one range per row into a list column of `dtype` elements.
///
/// `None` rows become undefined entries. Rows are generated on the rayon pool
/// when `parallel` is set; the result is identical either way.
pub fn list_column(specs: &[Option<RangeSpec>], dtype: IntegerType, parallel: bool) -> ColumnData {
	dispatch!(dtype, list(specs, parallel))
}

fn flat<T>(spec: &RangeSpec) -> ColumnData
where
	T: IsInt,
	ColumnData: From<NumberContainer<T>>,
{
	NumberContainer::from_vec(spec.values::<T>()).into()
}

fn list<T>(specs: &[Option<RangeSpec>], parallel: bool) -> ColumnData
where
	T: IsInt,
	ColumnData: From<NumberContainer<T>>,
{
	let rows: Vec<Option<Vec<T>>> = if parallel {
		trace!(rows = specs.len(), "generating rows in parallel");
		specs.par_iter().map(|spec| spec.as_ref().map(RangeSpec::values::<T>)).collect()
	} else {
		specs.iter().map(|spec| spec.as_ref().map(RangeSpec::values::<T>)).collect()
	};

	let total = rows.iter().flatten().map(Vec::len).sum();
	let mut offsets = Vec::with_capacity(rows.len() + 1);
	let mut bitvec = BitVec::with_capacity(rows.len());
	let mut values = Vec::with_capacity(total);

	offsets.push(0);
	for row in rows {
		match row {
			Some(row) => {
				values.extend(row);
				bitvec.push(true);
			}
			None => bitvec.push(false),
		}
		offsets.push(values.len());
	}

	ListContainer::new(offsets, NumberContainer::from_vec(values).into(), bitvec).into()
}
