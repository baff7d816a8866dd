// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! The memory mapped power management window.
//!
//! All offsets are relative to PWRMBASE. The window starts with the PMC
//! IPC mailbox, used for in-band commands to the PMC microcontroller,
//! followed by general power management configuration, thermal sensing,
//! and power gating registers.

use tock_registers::{register_bitfields, LocalRegisterCopy};

use crate::regmap::{contiguous_mask, disjoint, Register, RegisterSpace};

/// IPC command doorbell. Writing this register submits a command, so the
/// write buffers must be filled first.
pub const IPC_CMD: Register<u32, IPC_CMD::Register> = Register::new(RegisterSpace::Pwrm, 0x00);

/// IPC status.
pub const IPC_STS: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x04);

/// IPC write buffer, four dwords of command payload.
pub const IPC_WBUF: [Register<u32>; 4] = [
    Register::new(RegisterSpace::Pwrm, 0x80),
    Register::new(RegisterSpace::Pwrm, 0x84),
    Register::new(RegisterSpace::Pwrm, 0x88),
    Register::new(RegisterSpace::Pwrm, 0x8C),
];

/// IPC read buffer, four dwords of response payload.
pub const IPC_RBUF: [Register<u32>; 4] = [
    Register::new(RegisterSpace::Pwrm, 0x90),
    Register::new(RegisterSpace::Pwrm, 0x94),
    Register::new(RegisterSpace::Pwrm, 0x98),
    Register::new(RegisterSpace::Pwrm, 0x9C),
];

/// General PM configuration A, mostly reset status reporting.
pub const GEN_PMCON_A: Register<u32, GEN_PMCON_A::Register> =
    Register::new(RegisterSpace::Pwrm, 0x1020);

/// General PM configuration B.
pub const GEN_PMCON_B: Register<u32, GEN_PMCON_B::Register> =
    Register::new(RegisterSpace::Pwrm, 0x1024);

/// ModPHY power management configuration 5.
pub const MODPHY_PM_CFG5: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x10D0);

/// ModPHY power management configuration 6.
pub const MODPHY_PM_CFG6: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x10D4);

/// Timed GPIO control 0.
pub const TIMED_GPIO_CONTROL_0: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1210);

/// Timed GPIO control 1.
pub const TIMED_GPIO_CONTROL_1: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1310);

/// Temperature sensor control and status.
pub const THERMAL_TSS0: Register<u32, THERMAL_TSS0::Register> =
    Register::new(RegisterSpace::Pwrm, 0x1560);

/// Wake alarm device timer, AC phase.
pub const WADT_AC: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1800);

/// Power management configuration.
pub const CFG: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1818);

/// Power management configuration register 4.
pub const CFG4: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x18E8);

/// SLP_S0 residency counter.
pub const SLP_S0_RESIDENCY_COUNTER: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x193C);

/// Configuration register at 0x1B1C, identified by offset only.
pub const REG_1B1C: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1B1C);

/// Configuration register at 0x1BD0, identified by offset only.
pub const REG_1BD0: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1BD0);

/// Static power gating function disable 1.
pub const ST_PG_FDIS_PMC_1: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1E20);

/// Non-static power gating function disable 1.
pub const NST_PG_FDIS_1: Register<u32> = Register::new(RegisterSpace::Pwrm, 0x1E28);

/// Length in bytes of the Low Power Mode requirements block.
pub const LPM_REQ_DATA_LEN: usize = 192;

/// Length in bits of the Low Power Mode requirements block.
pub const LPM_REQ_BITS_DATA_LEN: usize = 1536;

register_bitfields![u32,
    pub IPC_CMD [
        /// Command opcode. SrcClkPortMapping programs source clock and
        /// port mapping.
        COMMAND OFFSET(0) NUMBITS(8) [
            SrcClkPortMapping = 0xAC,
        ],
        /// Sub-command identifier, qualifying the opcode.
        CMD_ID OFFSET(12) NUMBITS(4) [],
        /// Payload length in bytes.
        SIZE OFFSET(16) NUMBITS(8) [],
    ],

    pub GEN_PMCON_A [
        /// A host reset occurred.
        HOST_RST_STS OFFSET(9) NUMBITS(1) [],
        /// Power failure: the core well lost power unexpectedly.
        PWR_FLR OFFSET(14) NUMBITS(1) [],
        /// A global reset occurred.
        GBL_RST_STS OFFSET(24) NUMBITS(1) [],
    ],

    pub GEN_PMCON_B [
        /// The RTC well lost power.
        RTC_PWR_STS OFFSET(2) NUMBITS(1) [],
        /// Locks the SMI enable configuration until the next reset.
        SMI_LOCK OFFSET(4) NUMBITS(1) [],
    ],

    pub THROT_1 [
        /// Voltage regulator alert.
        VR_ALERT OFFSET(0) NUMBITS(1) [],
    ],

    pub THERMAL_TSS0 [
        /// Temperature sensor reading.
        TSR OFFSET(0) NUMBITS(9) [],
    ],
];

/// Type-safe copy of an IPC command word.
pub type IpcCmdVal = LocalRegisterCopy<u32, IPC_CMD::Register>;

/// Type-safe copy of a thermal sensor status value.
pub type ThermalTss0Val = LocalRegisterCopy<u32, THERMAL_TSS0::Register>;

// IPC command fields must not alias and must each be one contiguous run.
const _: () = {
    let command = IPC_CMD::COMMAND.mask << IPC_CMD::COMMAND.shift;
    let cmd_id = IPC_CMD::CMD_ID.mask << IPC_CMD::CMD_ID.shift;
    let size = IPC_CMD::SIZE.mask << IPC_CMD::SIZE.shift;
    assert!(disjoint(&[command, cmd_id, size]));
    assert!(contiguous_mask(command));
    assert!(contiguous_mask(cmd_id));
    assert!(contiguous_mask(size));
};

const _: () = {
    assert!(disjoint(&[
        GEN_PMCON_A::HOST_RST_STS.mask << GEN_PMCON_A::HOST_RST_STS.shift,
        GEN_PMCON_A::PWR_FLR.mask << GEN_PMCON_A::PWR_FLR.shift,
        GEN_PMCON_A::GBL_RST_STS.mask << GEN_PMCON_A::GBL_RST_STS.shift,
    ]));
    assert!(disjoint(&[
        GEN_PMCON_B::RTC_PWR_STS.mask << GEN_PMCON_B::RTC_PWR_STS.shift,
        GEN_PMCON_B::SMI_LOCK.mask << GEN_PMCON_B::SMI_LOCK.shift,
    ]));
    assert!(contiguous_mask(
        THERMAL_TSS0::TSR.mask << THERMAL_TSS0::TSR.shift
    ));
};

// The requirements block is stated once in bytes and once in bits.
const _: () = assert!(LPM_REQ_BITS_DATA_LEN == LPM_REQ_DATA_LEN * 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_mailbox_layout() {
        assert_eq!(IPC_CMD.offset(), 0x00);
        assert_eq!(IPC_STS.offset(), 0x04);
        assert_eq!(IPC_CMD.space(), RegisterSpace::Pwrm);

        for (i, reg) in IPC_WBUF.iter().enumerate() {
            assert_eq!(reg.offset(), 0x80 + 4 * i as u32);
        }
        for (i, reg) in IPC_RBUF.iter().enumerate() {
            assert_eq!(reg.offset(), 0x90 + 4 * i as u32);
        }
    }

    #[test]
    fn ipc_command_word_packs_as_documented() {
        let mut cmd = IpcCmdVal::new(0);
        cmd.modify(IPC_CMD::COMMAND::SrcClkPortMapping);
        cmd.modify(IPC_CMD::SIZE.val(8));
        assert_eq!(cmd.get(), 0x0008_00AC);

        assert_eq!(cmd.read(IPC_CMD::COMMAND), 0xAC);
        assert!(matches!(
            cmd.read_as_enum(IPC_CMD::COMMAND),
            Some(IPC_CMD::COMMAND::Value::SrcClkPortMapping)
        ));

        cmd.modify(IPC_CMD::CMD_ID.val(0x3));
        assert_eq!(cmd.read(IPC_CMD::CMD_ID), 0x3);
        assert_eq!(cmd.read(IPC_CMD::COMMAND), 0xAC);
    }

    #[test]
    fn pm_configuration_offsets_match_the_datasheet() {
        assert_eq!(GEN_PMCON_A.offset(), 0x1020);
        assert_eq!(GEN_PMCON_B.offset(), 0x1024);
        assert_eq!(MODPHY_PM_CFG5.offset(), 0x10D0);
        assert_eq!(MODPHY_PM_CFG6.offset(), 0x10D4);
        assert_eq!(TIMED_GPIO_CONTROL_0.offset(), 0x1210);
        assert_eq!(TIMED_GPIO_CONTROL_1.offset(), 0x1310);
        assert_eq!(THERMAL_TSS0.offset(), 0x1560);
        assert_eq!(WADT_AC.offset(), 0x1800);
        assert_eq!(CFG.offset(), 0x1818);
        assert_eq!(CFG4.offset(), 0x18E8);
        assert_eq!(SLP_S0_RESIDENCY_COUNTER.offset(), 0x193C);
        assert_eq!(REG_1B1C.offset(), 0x1B1C);
        assert_eq!(REG_1BD0.offset(), 0x1BD0);
        assert_eq!(ST_PG_FDIS_PMC_1.offset(), 0x1E20);
        assert_eq!(NST_PG_FDIS_1.offset(), 0x1E28);
    }

    #[test]
    fn reset_status_bits_match_the_datasheet() {
        let con_a = LocalRegisterCopy::<u32, GEN_PMCON_A::Register>::new((1 << 24) | (1 << 9));
        assert!(con_a.is_set(GEN_PMCON_A::GBL_RST_STS));
        assert!(con_a.is_set(GEN_PMCON_A::HOST_RST_STS));
        assert!(!con_a.is_set(GEN_PMCON_A::PWR_FLR));

        assert_eq!(u32::from(GEN_PMCON_B::SMI_LOCK::SET), 1 << 4);
        assert_eq!(u32::from(GEN_PMCON_B::RTC_PWR_STS::SET), 1 << 2);
    }

    #[test]
    fn thermal_sensor_reading_is_9_bits() {
        let tss = ThermalTss0Val::new(0xFFFF_FFFF);
        assert_eq!(tss.read(THERMAL_TSS0::TSR), 0x1FF);

        let tss = ThermalTss0Val::new(0x0000_0123);
        assert_eq!(tss.read(THERMAL_TSS0::TSR), 0x123);
    }

    #[test]
    fn throttle_alert_is_bit_zero() {
        assert_eq!(u32::from(THROT_1::VR_ALERT::SET), 1 << 0);
    }

    #[test]
    fn lpm_requirements_block_sizes_agree() {
        assert_eq!(LPM_REQ_DATA_LEN, 192);
        assert_eq!(LPM_REQ_BITS_DATA_LEN, 8 * LPM_REQ_DATA_LEN);
    }
}
