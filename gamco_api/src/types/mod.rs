mod fund;
pub use self::fund::Fund;
pub(crate) use self::fund::PERIOD_END_FORMAT;

mod collection;
pub use self::collection::FundCollection;
