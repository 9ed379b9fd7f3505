//! Metadata for the one-byte VCP codes defined by MCCS.
//!
//! The table is static and read-only. [`lookup`] is what the parser consults
//! when assembling [`VcpCommandDefinition`](crate::VcpCommandDefinition)s;
//! callers that carry their own vendor tables can implement [`VcpMetadata`]
//! and hand it to [`CapabilitiesParser::with_metadata`](crate::CapabilitiesParser::with_metadata).

use core::fmt;

/// The group a VCP code belongs to.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VcpCategory {
    Preset,
    Miscellaneous,
    Image,
    Geometry,
    Audio,
    Control,
    Dpvl,
    ManufacturerSpecific,
    /// The code is not in the table, or has no category assigned.
    #[default]
    Unknown,
}

impl VcpCategory {
    /// The category label used by MCCS.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preset => "Preset",
            Self::Miscellaneous => "Miscellaneous",
            Self::Image => "Image",
            Self::Geometry => "Geometry",
            Self::Audio => "Audio",
            Self::Control => "Control",
            Self::Dpvl => "DPVL",
            Self::ManufacturerSpecific => "Manufacturer Specific",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for VcpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A one-byte VCP code.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VcpCode(pub u8);

impl VcpCode {
    /// Default display name, if MCCS defines this code.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        lookup(self.0).map(|(name, _)| name)
    }

    /// Category of the code, [`VcpCategory::Unknown`] when undefined.
    #[must_use]
    pub fn category(self) -> VcpCategory {
        lookup(self.0).map_or(VcpCategory::Unknown, |(_, category)| category)
    }

    /// Whether MCCS defines this code.
    #[must_use]
    pub fn is_defined(self) -> bool {
        lookup(self.0).is_some()
    }
}

impl From<u8> for VcpCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<VcpCode> for u8 {
    fn from(code: VcpCode) -> Self {
        code.0
    }
}

impl fmt::Display for VcpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// Source of default names and categories for VCP codes.
///
/// Implementations must be pure: the same code always yields the same
/// answer, and a lookup never allocates.
pub trait VcpMetadata {
    fn lookup(&self, code: u8) -> Option<(&'static str, VcpCategory)>;
}

/// The MCCS table from this module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MccsMetadata;

impl VcpMetadata for MccsMetadata {
    #[inline]
    fn lookup(&self, code: u8) -> Option<(&'static str, VcpCategory)> {
        lookup(code)
    }
}

/// Returns the default name and category of `code`.
///
/// Codes `E0`-`FF` are reserved for manufacturers and all share one entry.
#[must_use]
pub fn lookup(code: u8) -> Option<(&'static str, VcpCategory)> {
    match code {
        0xE0..=0xFF => Some(("Manufacturer Specific", VcpCategory::ManufacturerSpecific)),
        code => standard(code),
    }
}

macro_rules! vcp_codes {
    ( $( $constant:ident = $code:literal, $category:ident, $name:literal; )* ) => {
        impl VcpCode {
            $(
                #[doc = $name]
                pub const $constant: VcpCode = VcpCode($code);
            )*
        }

        fn standard(code: u8) -> Option<(&'static str, VcpCategory)> {
            match code {
                $( $code => Some(($name, VcpCategory::$category)), )*
                _ => None,
            }
        }
    };
}

vcp_codes! {
    VCP_CODE_PAGE = 0x00, Preset, "VCP Code Page";
    DEGAUSS = 0x01, Miscellaneous, "Degauss";
    NEW_CONTROL_VALUE = 0x02, Miscellaneous, "New Control Value";
    SOFT_CONTROLS = 0x03, Miscellaneous, "Soft Controls";
    RESTORE_FACTORY_DEFAULTS = 0x04, Preset, "Restore Factory Defaults";
    RESTORE_FACTORY_LUMINANCE_CONTRAST_DEFAULTS = 0x05, Preset, "Restore Factory Luminance/Contrast Defaults";
    RESTORE_FACTORY_GEOMETRY_DEFAULTS = 0x06, Preset, "Restore Factory Geometry Defaults";
    RESTORE_FACTORY_COLOR_DEFAULTS = 0x08, Preset, "Restore Factory Color Defaults";
    RESTORE_FACTORY_TV_DEFAULTS = 0x0A, Preset, "Restore Factory TV Defaults";
    COLOR_TEMPERATURE_INCREMENT = 0x0B, Image, "Color Temperature Increment";
    COLOR_TEMPERATURE_REQUEST = 0x0C, Image, "Color Temperature Request";
    CLOCK = 0x0E, Image, "Clock";
    LUMINANCE = 0x10, Image, "Luminance";
    FLESH_TONE_ENHANCEMENT = 0x11, Image, "Flesh Tone Enhancement";
    CONTRAST = 0x12, Image, "Contrast";
    BACKLIGHT_CONTROL = 0x13, Image, "Backlight Control";
    SELECT_COLOR_PRESET = 0x14, Image, "Select Color Preset";
    VIDEO_GAIN_RED = 0x16, Image, "Video Gain (Drive): Red";
    USER_COLOR_VISION_COMPENSATION = 0x17, Image, "User Color Vision Compensation";
    VIDEO_GAIN_GREEN = 0x18, Image, "Video Gain (Drive): Green";
    VIDEO_GAIN_BLUE = 0x1A, Image, "Video Gain (Drive): Blue";
    FOCUS = 0x1C, Image, "Focus";
    AUTO_SETUP = 0x1E, Image, "Auto Setup";
    AUTO_COLOR_SETUP = 0x1F, Image, "Auto Color Setup";
    HORIZONTAL_POSITION = 0x20, Geometry, "Horizontal Position (Phase)";
    HORIZONTAL_SIZE = 0x22, Geometry, "Horizontal Size";
    HORIZONTAL_PINCUSHION = 0x24, Geometry, "Horizontal Pincushion";
    HORIZONTAL_PINCUSHION_BALANCE = 0x26, Geometry, "Horizontal Pincushion Balance";
    HORIZONTAL_CONVERGENCE_RED_BLUE = 0x28, Geometry, "Horizontal Convergence R / B";
    HORIZONTAL_CONVERGENCE_MAGENTA_GREEN = 0x29, Geometry, "Horizontal Convergence M / G";
    HORIZONTAL_LINEARITY = 0x2A, Geometry, "Horizontal Linearity";
    HORIZONTAL_LINEARITY_BALANCE = 0x2C, Geometry, "Horizontal Linearity Balance";
    GRAY_SCALE_EXPANSION = 0x2E, Image, "Gray Scale Expansion";
    VERTICAL_POSITION = 0x30, Geometry, "Vertical Position (Phase)";
    VERTICAL_SIZE = 0x32, Geometry, "Vertical Size";
    VERTICAL_PINCUSHION = 0x34, Geometry, "Vertical Pincushion";
    VERTICAL_PINCUSHION_BALANCE = 0x36, Geometry, "Vertical Pincushion Balance";
    VERTICAL_CONVERGENCE_RED_BLUE = 0x38, Geometry, "Vertical Convergence R/B";
    VERTICAL_CONVERGENCE_MAGENTA_GREEN = 0x39, Geometry, "Vertical Convergence M/G";
    VERTICAL_LINEARITY = 0x3A, Geometry, "Vertical Linearity";
    VERTICAL_LINEARITY_BALANCE = 0x3C, Geometry, "Vertical Linearity Balance";
    CLOCK_PHASE = 0x3E, Image, "Clock Phase";
    HORIZONTAL_PARALLELOGRAM = 0x40, Geometry, "Horizontal Parallelogram";
    VERTICAL_PARALLELOGRAM = 0x41, Geometry, "Vertical Parallelogram";
    HORIZONTAL_KEYSTONE = 0x42, Geometry, "Horizontal Keystone";
    VERTICAL_KEYSTONE = 0x43, Geometry, "Vertical Keystone";
    TOP_CORNER_FLARE = 0x46, Geometry, "Top Corner Flare";
    TOP_CORNER_HOOK = 0x48, Geometry, "Top Corner Hook";
    BOTTOM_CORNER_FLARE = 0x4A, Geometry, "Bottom Corner Flare";
    BOTTOM_CORNER_HOOK = 0x4C, Geometry, "Bottom Corner Hook";
    ACTIVE_CONTROL = 0x52, Miscellaneous, "Active Control";
    PERFORMANCE_PRESERVATION = 0x54, Miscellaneous, "Performance Preservation";
    HORIZONTAL_MOIRE = 0x56, Image, "H Moiré";
    VERTICAL_MOIRE = 0x58, Image, "V Moiré";
    SIX_AXIS_SATURATION_CONTROL_RED = 0x59, Image, "6 Axis Saturation Control: Red";
    SIX_AXIS_SATURATION_CONTROL_YELLOW = 0x5A, Image, "6 Axis Saturation Control: Yellow";
    SIX_AXIS_SATURATION_CONTROL_GREEN = 0x5B, Image, "6 Axis Saturation Control: Green";
    SIX_AXIS_SATURATION_CONTROL_CYAN = 0x5C, Image, "6 Axis Saturation Control: Cyan";
    SIX_AXIS_SATURATION_CONTROL_BLUE = 0x5D, Image, "6 Axis Saturation Control: Blue";
    SIX_AXIS_SATURATION_CONTROL_MAGENTA = 0x5E, Image, "6 Axis Saturation Control: Magenta";
    INPUT_SELECT = 0x60, Miscellaneous, "Input Select";
    AUDIO_SPEAKER_VOLUME = 0x62, Audio, "Audio: Speaker Volume";
    AUDIO_SPEAKER_PAIR_SELECT = 0x63, Audio, "Audio: Speaker Pair Select";
    AUDIO_MICROPHONE_VOLUME = 0x64, Audio, "Audio: Microphone Volume";
    AUDIO_JACK_CONNECTION_STATUS = 0x65, Audio, "Audio: Jack Connection Status";
    AMBIENT_LIGHT_SENSOR = 0x66, Miscellaneous, "Ambient Light Sensor";
    BACKLIGHT_LEVEL_WHITE = 0x6B, Image, "Backlight Level: White";
    VIDEO_BLACK_LEVEL_RED = 0x6C, Image, "Video Black Level: Red";
    BACKLIGHT_LEVEL_RED = 0x6D, Image, "Backlight Level: Red";
    VIDEO_BLACK_LEVEL_GREEN = 0x6E, Image, "Video Black Level: Green";
    BACKLIGHT_LEVEL_GREEN = 0x6F, Image, "Backlight Level: Green";
    VIDEO_BLACK_LEVEL_BLUE = 0x70, Image, "Video Black Level: Blue";
    BACKLIGHT_LEVEL_BLUE = 0x71, Image, "Backlight Level: Blue";
    GAMMA = 0x72, Image, "Gamma";
    LUT_SIZE = 0x73, Image, "LUT Size";
    SINGLE_POINT_LUT_OPERATION = 0x74, Image, "Single Point LUT Operation";
    BLOCK_LUT_OPERATION = 0x75, Image, "Block LUT Operation";
    REMOTE_PROCEDURE_CALL = 0x76, Miscellaneous, "Remote Procedure Call";
    DISPLAY_IDENTIFICATION_DATA_OPERATION = 0x78, Miscellaneous, "Display Identification Data Operation";
    ADJUST_ZOOM = 0x7C, Image, "Adjust Zoom";
    HORIZONTAL_MIRROR = 0x82, Geometry, "Horizontal Mirror (Flip)";
    VERTICAL_MIRROR = 0x84, Geometry, "Vertical Mirror (Flip)";
    DISPLAY_SCALING = 0x86, Geometry, "Display Scaling";
    SHARPNESS = 0x87, Image, "Sharpness";
    VELOCITY_SCAN_MODULATION = 0x88, Image, "Velocity Scan Modulation";
    COLOR_SATURATION = 0x8A, Image, "Color Saturation";
    TV_CHANNEL_UP_AND_DOWN = 0x8B, Miscellaneous, "TV Channel Up / Down";
    TV_SHARPNESS = 0x8C, Image, "TV Sharpness";
    AUDIO_MUTE_AND_SCREEN_BLANK = 0x8D, Audio, "Audio Mute / Screen Blank";
    TV_CONTRAST = 0x8E, Image, "TV Contrast";
    AUDIO_TREBLE = 0x8F, Audio, "Audio Treble";
    HUE = 0x90, Image, "Hue";
    AUDIO_BASS = 0x91, Audio, "Audio Bass";
    TV_BLACK_LEVEL = 0x92, Image, "TV Black Level / Luminance";
    AUDIO_BALANCE_LEFT_RIGHT = 0x93, Audio, "Audio Balance L / R";
    AUDIO_PROCESSOR_MODE = 0x94, Audio, "Audio Processor Mode";
    WINDOW_POSITION_LEFT = 0x95, Geometry, "Window Position (TL_X)";
    WINDOW_POSITION_TOP = 0x96, Geometry, "Window Position (TL_Y)";
    WINDOW_POSITION_RIGHT = 0x97, Geometry, "Window Position (BR_X)";
    WINDOW_POSITION_BOTTOM = 0x98, Geometry, "Window Position (BR_Y)";
    WINDOW_BACKGROUND = 0x9A, Image, "Window Background";
    SIX_AXIS_COLOR_CONTROL_RED = 0x9B, Image, "6 Axis Color Control: Red";
    SIX_AXIS_COLOR_CONTROL_YELLOW = 0x9C, Image, "6 Axis Color Control: Yellow";
    SIX_AXIS_COLOR_CONTROL_GREEN = 0x9D, Image, "6 Axis Color Control: Green";
    SIX_AXIS_COLOR_CONTROL_CYAN = 0x9E, Image, "6 Axis Color Control: Cyan";
    SIX_AXIS_COLOR_CONTROL_BLUE = 0x9F, Image, "6 Axis Color Control: Blue";
    SIX_AXIS_COLOR_CONTROL_MAGENTA = 0xA0, Image, "6 Axis Color Control: Magenta";
    AUTO_SETUP_ON_OFF = 0xA2, Image, "Auto Setup On / Off";
    WINDOW_MASK_CONTROL = 0xA4, Image, "Window Mask Control";
    WINDOW_SELECT = 0xA5, Image, "Window Select";
    WINDOW_SIZE = 0xA6, Image, "Window Size";
    WINDOW_TRANSPARENCY = 0xA7, Image, "Window Transparency";
    SCREEN_ORIENTATION = 0xAA, Image, "Screen Orientation";
    HORIZONTAL_FREQUENCY = 0xAC, Control, "Horizontal Frequency";
    VERTICAL_FREQUENCY = 0xAE, Control, "Vertical Frequency";
    SETTINGS = 0xB0, Preset, "Settings";
    FLAT_PANEL_SUB_PIXEL_LAYOUT = 0xB2, Miscellaneous, "Flat Panel Sub-Pixel Layout";
    SOURCE_TIMING_MODE = 0xB4, Control, "Source Timing Mode";
    SOURCE_COLOR_CODING = 0xB5, Control, "Source Color Coding";
    DISPLAY_TECHNOLOGY_TYPE = 0xB6, Miscellaneous, "Display Technology Type";
    DPVL_DISPLAY_STATUS = 0xB7, Dpvl, "DPVL : Display status";
    DPVL_PACKET_COUNT = 0xB8, Dpvl, "DPVL : Packet count";
    DPVL_DISPLAY_X_ORIGIN = 0xB9, Dpvl, "DPVL : Display X origin";
    DPVL_DISPLAY_Y_ORIGIN = 0xBA, Dpvl, "DPVL : Display Y origin";
    DPVL_HEADER_CRC_ERROR_COUNT = 0xBB, Dpvl, "DPVL : Header CRC error count";
    DPVL_BODY_CRC_ERROR_COUNT = 0xBC, Dpvl, "DPVL : Body CRC error count";
    DPVL_CLIENT_ID = 0xBD, Dpvl, "DPVL : Client ID";
    DPVL_LINK_CONTROL = 0xBE, Dpvl, "DPVL : Link control";
    DISPLAY_USAGE_TIME = 0xC0, Control, "Display Usage Time";
    DISPLAY_DESCRIPTOR_LENGTH = 0xC2, Miscellaneous, "Display Descriptor Length";
    TRANSMIT_DISPLAY_DESCRIPTOR = 0xC3, Miscellaneous, "Transmit Display Descriptor";
    ENABLE_DISPLAY_OF_DISPLAY_DESCRIPTOR = 0xC4, Miscellaneous, "Enable Display of 'Display Descriptor'";
    APPLICATION_ENABLE_KEY = 0xC6, Miscellaneous, "Application Enable Key";
    RESERVED = 0xC7, Unknown, "Reserved";
    DISPLAY_CONTROLLER_ID = 0xC8, Control, "Display Controller ID";
    DISPLAY_FIRMWARE_LEVEL = 0xC9, Control, "Display Firmware Level";
    OSD = 0xCA, Control, "OSD";
    OSD_LANGUAGE = 0xCC, Control, "OSD Language";
    STATUS_INDICATORS = 0xCD, Miscellaneous, "Status Indicators";
    AUXILIARY_DISPLAY_SIZE = 0xCE, Miscellaneous, "Auxiliary Display Size";
    AUXILIARY_DISPLAY_DATA = 0xCF, Miscellaneous, "Auxiliary Display Data";
    OUTPUT_SELECTION = 0xD0, Miscellaneous, "Output Selection";
    ASSET_TAG = 0xD2, Miscellaneous, "Asset Tag";
    STEREO_VIDEO_MODE = 0xD4, Image, "Stereo Video Mode";
    POWER_MODE = 0xD6, Control, "Power Mode";
    AUXILIARY_POWER_OUTPUT = 0xD7, Miscellaneous, "Auxiliary Power Output";
    SCAN_MODE = 0xDA, Geometry, "Scan Mode";
    IMAGE_MODE = 0xDB, Control, "Image Mode";
    DISPLAY_APPLICATION = 0xDC, Image, "Display Application";
    SCRATCH_PAD = 0xDE, Miscellaneous, "Scratch Pad";
    VCP_VERSION = 0xDF, Control, "VCP Version";
}
