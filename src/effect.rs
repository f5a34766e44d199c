/// Side effects declared by the reducer. Opening a purchase link is the only
/// one; the outcome of the open is never reported back.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    OpenLink { url: String },
}
