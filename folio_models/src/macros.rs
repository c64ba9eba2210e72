macro_rules! id {
    ($ident:ident) => {
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deref,
            From,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(::uuid::Uuid);
    };
}

macro_rules! nutype_string {
    ($ident:ident ( $($args:tt)* )) => {
        #[::nutype::nutype(
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use id;
pub(crate) use nutype_string;
