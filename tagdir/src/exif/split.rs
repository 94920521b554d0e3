//! Splits vendor array tags into one tag per element.

use tagdir_types::value::TagValue;

use super::directory::Directory;

/// Applies the directory kind's split rules.
///
/// Each matching array tag is replaced by scalar tags `offset + index`.
/// Anything that isn't an array is left alone.
pub(crate) fn split_arrays(directory: &mut Directory) {
    let kind = directory.kind();

    for rule in kind.split_rules() {
        if !matches!(directory.get(rule.tag), Some(TagValue::Array { .. })) {
            continue;
        }
        let Some(TagValue::Array { list, .. }) = directory.remove(rule.tag) else {
            continue;
        };

        log::trace!(
            "Splitting {kind} tag `{:#06x}` into `{}` tags at `{:#06x}`.",
            rule.tag,
            list.len(),
            rule.offset
        );
        for (index, primitive) in list.into_iter().enumerate() {
            let Some(tag) = rule.tag_for(index) else {
                log::warn!("{kind} tag `{:#06x}` is too long to split fully.", rule.tag);
                break;
            };
            directory.insert(tag, TagValue::Scalar(primitive));
        }
    }
}

#[cfg(test)]
mod tests {
    use tagdir_types::{
        kind::DirectoryKind,
        primitives::{ByteOrder, Primitive, PrimitiveTy},
        value::TagValue,
    };

    use super::split_arrays;
    use crate::{exif::directory::Directory, util::logger};

    fn shorts(values: &[u16]) -> TagValue {
        TagValue::Array {
            list: values.iter().copied().map(Primitive::Short).collect(),
            ty: PrimitiveTy::Short,
        }
    }

    #[test]
    fn canon_camera_settings() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Canon, 0, ByteOrder::Little);
        dir.insert(0x0001, shorts(&[10, 20, 30, 40]));
        split_arrays(&mut dir);

        assert!(!dir.contains(0x0001));
        assert_eq!(dir.get_u32(0xC100), Some(10));
        assert_eq!(dir.get_u32(0xC101), Some(20));
        assert_eq!(dir.get_u32(0xC102), Some(30));
        assert_eq!(dir.get_u32(0xC103), Some(40));
        assert_eq!(dir.len(), 4);
    }

    #[test]
    fn scalars_stay_put() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Canon, 0, ByteOrder::Little);
        dir.insert(0x0004, TagValue::Scalar(Primitive::Short(7)));
        split_arrays(&mut dir);

        assert_eq!(dir.get_u32(0x0004), Some(7));
        assert!(!dir.contains(0xC400));
    }

    #[test]
    fn other_kinds_have_no_rules() {
        logger();

        let mut dir = Directory::new(DirectoryKind::Nikon2, 0, ByteOrder::Little);
        dir.insert(0x0001, shorts(&[1, 2]));
        split_arrays(&mut dir);

        assert!(dir.contains(0x0001));
    }
}
