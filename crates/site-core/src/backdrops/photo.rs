/// A still photograph under a legibility gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoBackdrop {
    pub src: &'static str,
    pub overlay: &'static str,
}

pub const PHOTO: PhotoBackdrop = PhotoBackdrop {
    src: "/backgrounds/malibu-sunset.png",
    overlay: "linear-gradient(to bottom, rgba(10,10,10,0.65) 0%, rgba(10,10,10,0.45) 25%, rgba(10,10,10,0.2) 50%, rgba(10,10,10,0.35) 100%)",
};
