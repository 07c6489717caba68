/// Types with a minimum and maximum representable value.
///
/// The two extremes double as sentinels for open range bounds: a bound equal
/// to `MIN` or `MAX` reads as "unbounded" in that direction.
pub trait Bounded: Sized {
	const MIN: Self;
	const MAX: Self;
}

macro_rules! impl_bounded {
	($ty:ident) => {
		impl Bounded for $ty {
			const MIN: $ty = $ty::MIN;
			const MAX: $ty = $ty::MAX;
		}
	};
}

impl_bounded!(u8);
impl_bounded!(u16);
impl_bounded!(u32);
impl_bounded!(u64);
impl_bounded!(u128);
impl_bounded!(usize);
impl_bounded!(i8);
impl_bounded!(i16);
impl_bounded!(i32);
impl_bounded!(i64);
impl_bounded!(i128);
impl_bounded!(isize);
