/// Generate `ALL`, `as_str`, `parse`, `Display`, `From<T> for String`, and
/// `TryFrom<String> for T` for a closed enum of table values.
///
/// The enum must already have its definition with derives. Unknown strings
/// return an error from `TryFrom` and `None` from `parse`; domain code turns
/// those into its own validation errors. `ALL` lists the variants in
/// declaration order, which is also the canonical iteration order.
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($str => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> ::std::result::Result<Self, Self::Error> {
                $name::parse(&s).ok_or_else(|| format!("unknown {}: {s}", stringify!($name)))
            }
        }
    };
}
