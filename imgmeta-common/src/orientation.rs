/// Operations that have to be applied to orient the image correctly
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Id,
    Rotation90,
    Rotation180,
    Rotation270,
    Mirrored,
    MirroredRotation90,
    MirroredRotation180,
    MirroredRotation270,
}

/// Exif orientation outside of 1 to 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Orientation value {0} is not defined")]
pub struct UnknownOrientation(pub u16);

impl TryFrom<u16> for Orientation {
    type Error = UnknownOrientation;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Id,
            2 => Self::Mirrored,
            3 => Self::Rotation180,
            4 => Self::MirroredRotation180,
            5 => Self::MirroredRotation90,
            6 => Self::Rotation270,
            7 => Self::MirroredRotation270,
            8 => Self::Rotation90,
            other => return Err(UnknownOrientation(other)),
        })
    }
}

impl Orientation {
    /// Position of the 0th row and 0th column as Exif describes it
    ///
    /// ```
    /// # use imgmeta_common::orientation::Orientation;
    /// assert_eq!(Orientation::try_from(6).unwrap().position(), "right, top");
    /// ```
    pub fn position(self) -> &'static str {
        match self {
            Self::Id => "top, left",
            Self::Mirrored => "top, right",
            Self::Rotation180 => "bottom, right",
            Self::MirroredRotation180 => "bottom, left",
            Self::MirroredRotation90 => "left, top",
            Self::Rotation270 => "right, top",
            Self::MirroredRotation270 => "right, bottom",
            Self::Rotation90 => "left, bottom",
        }
    }

    pub fn mirror(self) -> bool {
        matches!(
            self,
            Self::Mirrored
                | Self::MirroredRotation90
                | Self::MirroredRotation180
                | Self::MirroredRotation270
        )
    }

    /// Rotation in degrees
    pub fn rotation(self) -> u16 {
        match self {
            Self::Id | Self::Mirrored => 0,
            Self::Rotation90 | Self::MirroredRotation90 => 90,
            Self::Rotation180 | Self::MirroredRotation180 => 180,
            Self::Rotation270 | Self::MirroredRotation270 => 270,
        }
    }
}
