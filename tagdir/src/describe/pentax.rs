use std::sync::LazyLock;

use tagdir_types::tags::pentax::PentaxTag as Tag;

use super::{Descriptor::Value, DescriptorTable, lookup, table};

pub(super) static PENTAX: LazyLock<DescriptorTable> = LazyLock::new(|| {
    table(&[
        (
            Tag::CaptureMode.tag_id(),
            Value(|v| lookup(v, &[(0, "Auto"), (1, "Night-scene"), (2, "Manual"), (4, "Multiple")])),
        ),
        (
            Tag::QualityLevel.tag_id(),
            Value(|v| lookup(v, &[(0, "Good"), (1, "Better"), (2, "Best")])),
        ),
        (
            Tag::FocusMode.tag_id(),
            Value(|v| lookup(v, &[(2, "Custom"), (3, "Auto")])),
        ),
        (
            Tag::FlashMode.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (1, "Auto"),
                        (2, "Flash On"),
                        (4, "Flash Off"),
                        (6, "Red-eye Reduction"),
                    ],
                )
            }),
        ),
        (
            Tag::WhiteBalance.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (0, "Auto"),
                        (1, "Daylight"),
                        (2, "Shade"),
                        (3, "Tungsten"),
                        (4, "Fluorescent"),
                        (5, "Manual"),
                    ],
                )
            }),
        ),
        (
            Tag::DigitalZoom.tag_id(),
            Value(|v| match v.as_i64()? {
                0 => Some("Off".to_owned()),
                _ => None,
            }),
        ),
        (
            Tag::Sharpness.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Soft"), (2, "Hard")])),
        ),
        (
            Tag::Contrast.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Low"), (2, "High")])),
        ),
        (
            Tag::Saturation.tag_id(),
            Value(|v| lookup(v, &[(0, "Normal"), (1, "Low"), (2, "High")])),
        ),
        (
            Tag::IsoSpeed.tag_id(),
            Value(|v| {
                lookup(
                    v,
                    &[
                        (10, "ISO 100"),
                        (16, "ISO 200"),
                        (100, "ISO 100"),
                        (200, "ISO 200"),
                    ],
                )
            }),
        ),
        (
            Tag::Colour.tag_id(),
            Value(|v| lookup(v, &[(1, "Normal"), (2, "Black & White"), (3, "Sepia")])),
        ),
    ])
});

#[cfg(test)]
mod tests {
    use tagdir_types::{
        kind::DirectoryKind,
        primitives::{ByteOrder, Primitive},
        value::TagValue,
    };

    use crate::{describe::describe, exif::Directory, util::logger};

    #[test]
    fn pentax_values() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Pentax, 0, ByteOrder::Big);
        dir.insert(0x0002, TagValue::Scalar(Primitive::Short(2)));
        dir.insert(0x000A, TagValue::Scalar(Primitive::Short(0)));
        dir.insert(0x0014, TagValue::Scalar(Primitive::Short(16)));

        assert_eq!(describe(&dir, 0x0002).as_deref(), Some("Best"));
        assert_eq!(describe(&dir, 0x000A).as_deref(), Some("Off"));
        assert_eq!(describe(&dir, 0x0014).as_deref(), Some("ISO 200"));
    }
}
