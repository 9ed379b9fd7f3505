//! DDC/CI command bytes advertised by the `cmds` tag.

macro_rules! ddc_ci_commands {
    ( $( $(#[$meta:meta])* $variant:ident = $code:literal, $name:literal; )* ) => {
        /// A DDC/CI command opcode.
        ///
        /// Bytes that are not defined by MCCS are kept as
        /// [`DdcCiCommand::Unknown`], so converting to and from `u8` is
        /// lossless. With the `serde` feature a command is encoded as its
        /// opcode byte.
        #[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(any(test, feature = "serde"), serde(from = "u8", into = "u8"))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum DdcCiCommand {
            $( $(#[$meta])* $variant, )*
            /// A byte with no MCCS meaning.
            ///
            /// Only bytes outside the named opcodes belong here. The parser
            /// and [`From<u8>`] never build `Unknown` for an assigned byte;
            /// one built by hand compares unequal to the named variant.
            /// Pass it through `u8` to normalize it.
            Unknown(u8),
        }

        impl DdcCiCommand {
            /// The opcode byte.
            #[must_use]
            pub const fn code(self) -> u8 {
                match self {
                    $( Self::$variant => $code, )*
                    Self::Unknown(code) => code,
                }
            }

            /// Human readable name, `None` for unknown opcodes.
            #[must_use]
            pub const fn name(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($name), )*
                    Self::Unknown(_) => None,
                }
            }
        }

        impl From<u8> for DdcCiCommand {
            fn from(code: u8) -> Self {
                match code {
                    $( $code => Self::$variant, )*
                    code => Self::Unknown(code),
                }
            }
        }
    };
}

ddc_ci_commands! {
    VcpRequest = 0x01, "VCP Request";
    VcpReply = 0x02, "VCP Reply";
    VcpSet = 0x03, "VCP Set";
    TimingReply = 0x06, "Timing Reply";
    TimingRequest = 0x07, "Timing Request";
    VcpReset = 0x09, "VCP Reset";
    SaveCurrentSettings = 0x0C, "Save Current Settings";
    SelfTestReply = 0xA1, "Display Self-Test Reply";
    SelfTestRequest = 0xB1, "Display Self-Test Request";
    IdentificationReply = 0xE1, "Identification Reply";
    TableReadRequest = 0xE2, "Table Read Request";
    CapabilitiesReply = 0xE3, "Capabilities Reply";
    TableReadReply = 0xE4, "Table Read Reply";
    TableWrite = 0xE7, "Table Write";
    IdentificationRequest = 0xF1, "Identification Request";
    CapabilitiesRequest = 0xF3, "Capabilities Request";
    EnableApplicationReport = 0xF5, "Enable Application Report";
}

impl From<DdcCiCommand> for u8 {
    fn from(command: DdcCiCommand) -> Self {
        command.code()
    }
}
