// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! ACPI and legacy power management registers.
//!
//! All offsets are I/O port offsets relative to ACPIBASE. The PM1 bank
//! follows the fixed-feature register layout from the ACPI specification;
//! SMI_EN/SMI_STS and the GPE0 bank are chipset specific.

use tock_registers::{register_bitfields, LocalRegisterCopy};

use crate::regmap::{contiguous_mask, disjoint, Register, RegisterSpace};

/// PM1 status. Read as a dword this register also exposes the enable half
/// in its upper 16 bits, which is where `RTC_EN` lives.
pub const PM1_STS: Register<u32, PM1_STS::Register> = Register::new(RegisterSpace::Io, 0x00);

/// PM1 control, holding the SCI routing bit and the sleep type field.
pub const PM1_CNT: Register<u32, PM1_CNT::Register> = Register::new(RegisterSpace::Io, 0x04);

/// ACPI power management timer.
pub const PM1_TMR: Register<u32, PM1_TMR::Register> = Register::new(RegisterSpace::Io, 0x08);

/// SMI enable.
pub const SMI_EN: Register<u32, SMI_EN::Register> = Register::new(RegisterSpace::Io, 0x30);

/// SMI status.
pub const SMI_STS: Register<u32, SMI_STS::Register> = Register::new(RegisterSpace::Io, 0x34);

/// General purpose event control.
pub const GPE_CNTL: Register<u32> = Register::new(RegisterSpace::Io, 0x40);

/// Overclocking watchdog control.
pub const OC_WDT_CTL: Register<u32> = Register::new(RegisterSpace::Io, 0x54);

/// GPE0 status, events 96 to 127.
pub const GPE0_STS_127_96: Register<u32> = Register::new(RegisterSpace::Io, 0x6C);

/// GPE0 enable, events 96 to 127.
pub const GPE0_EN_127_96: Register<u32, GPE0_EN_127_96::Register> =
    Register::new(RegisterSpace::Io, 0x7C);

/// Clock rate of the PM timer in Hz.
pub const PM1_TMR_FREQUENCY_HZ: u32 = 3_579_545;

/// Counter value at which the 24 bit PM timer wraps back to zero.
pub const PM1_TMR_ROLLOVER: u32 = 0x100_0000;

register_bitfields![u32,
    pub PM1_STS [
        /// PM timer overflowed.
        TMROF OFFSET(0) NUMBITS(1) [],
        /// Global status, set by firmware to raise an SCI.
        GBL OFFSET(5) NUMBITS(1) [],
        /// Power button was pressed.
        PWRBTN OFFSET(8) NUMBITS(1) [],
        /// RTC alarm fired.
        RTC OFFSET(10) NUMBITS(1) [],
        /// Power button override forced the system off.
        PRBTNOR OFFSET(11) NUMBITS(1) [],
        /// The system woke from a sleep state.
        WAK OFFSET(15) NUMBITS(1) [],
        /// RTC alarm wake enable, visible through the dword view of the
        /// combined status/enable pair.
        RTC_EN OFFSET(26) NUMBITS(1) [],
    ],

    pub PM1_EN [
        /// Power button event enable.
        PWRBTN OFFSET(8) NUMBITS(1) [],
    ],

    pub PM1_CNT [
        /// Route power management events to SCI instead of SMI.
        SCI_EN OFFSET(0) NUMBITS(1) [],
        /// Sleep type entered when the sleep enable bit is set.
        SLP_TYP OFFSET(10) NUMBITS(3) [
            S0 = 0b000,
            S3 = 0b101,
            S4 = 0b110,
            S5 = 0b111,
        ],
    ],

    pub PM1_TMR [
        /// Free running counter clocked at 3.579545 MHz.
        TMR_VAL OFFSET(0) NUMBITS(24) [],
    ],

    pub SMI_EN [
        GBL_SMI OFFSET(0) NUMBITS(1) [],
        /// End of SMI. Written by the handler to re-arm SMI generation.
        EOS OFFSET(1) NUMBITS(1) [],
        BIOS OFFSET(2) NUMBITS(1) [],
        LEGACY_USB OFFSET(3) NUMBITS(1) [],
        /// Raise an SMI when the sleep enable bit is written.
        ON_SLP_EN OFFSET(4) NUMBITS(1) [],
        /// Raise an SMI on writes to the APM command port.
        APMC OFFSET(5) NUMBITS(1) [],
        SWSMI_TMR OFFSET(6) NUMBITS(1) [],
        BIOS_RLS OFFSET(7) NUMBITS(1) [],
        MCSMI OFFSET(11) NUMBITS(1) [],
        TCO OFFSET(13) NUMBITS(1) [],
        PERIODIC OFFSET(14) NUMBITS(1) [],
        LEGACY_USB2 OFFSET(17) NUMBITS(1) [],
        INTEL_USB2 OFFSET(18) NUMBITS(1) [],
        /// Raise an SMI on attempts to unlock the GPIO pad lock.
        GPIO_UNLOCK OFFSET(27) NUMBITS(1) [],
        ESPI OFFSET(28) NUMBITS(1) [],
        LEGACY_USB3 OFFSET(31) NUMBITS(1) [],
    ],

    pub SMI_STS [
        BIOS OFFSET(2) NUMBITS(1) [],
        ON_SLP_EN OFFSET(4) NUMBITS(1) [],
        APM OFFSET(5) NUMBITS(1) [],
        SWSMI_TMR OFFSET(6) NUMBITS(1) [],
        MCSMI OFFSET(11) NUMBITS(1) [],
        TCO OFFSET(13) NUMBITS(1) [],
        PERIODIC OFFSET(14) NUMBITS(1) [],
        SMBUS OFFSET(16) NUMBITS(1) [],
    ],

    pub GPE0_EN_127_96 [
        /// PME wake enable.
        PME OFFSET(11) NUMBITS(1) [],
        /// PME_B0 wake enable, for bus 0 internal functions.
        PME_B0 OFFSET(13) NUMBITS(1) [],
    ],
];

/// Type-safe copy of a PM1 status value.
pub type Pm1StsVal = LocalRegisterCopy<u32, PM1_STS::Register>;

/// Type-safe copy of a PM1 control value.
pub type Pm1CntVal = LocalRegisterCopy<u32, PM1_CNT::Register>;

/// Type-safe copy of an SMI enable value.
pub type SmiEnVal = LocalRegisterCopy<u32, SMI_EN::Register>;

/// Type-safe copy of an SMI status value.
pub type SmiStsVal = LocalRegisterCopy<u32, SMI_STS::Register>;

// The rollover constant is the 24 bit counter range, one past the mask.
const _: () = assert!(PM1_TMR_ROLLOVER == (PM1_TMR::TMR_VAL.mask << PM1_TMR::TMR_VAL.shift) + 1);

// The sleep type field must stay one contiguous run with all of its
// encodings inside it.
const _: () = {
    let slp_typ = PM1_CNT::SLP_TYP.mask << PM1_CNT::SLP_TYP.shift;
    assert!(contiguous_mask(slp_typ));
    assert!(((0b101 << PM1_CNT::SLP_TYP.shift) & !slp_typ) == 0);
    assert!(((0b111 << PM1_CNT::SLP_TYP.shift) & !slp_typ) == 0);
};

// Named bits within one register must not alias each other.
const _: () = {
    assert!(disjoint(&[
        PM1_STS::TMROF.mask << PM1_STS::TMROF.shift,
        PM1_STS::GBL.mask << PM1_STS::GBL.shift,
        PM1_STS::PWRBTN.mask << PM1_STS::PWRBTN.shift,
        PM1_STS::RTC.mask << PM1_STS::RTC.shift,
        PM1_STS::PRBTNOR.mask << PM1_STS::PRBTNOR.shift,
        PM1_STS::WAK.mask << PM1_STS::WAK.shift,
        PM1_STS::RTC_EN.mask << PM1_STS::RTC_EN.shift,
    ]));
    assert!(disjoint(&[
        PM1_CNT::SCI_EN.mask << PM1_CNT::SCI_EN.shift,
        PM1_CNT::SLP_TYP.mask << PM1_CNT::SLP_TYP.shift,
    ]));
    assert!(disjoint(&[
        SMI_EN::GBL_SMI.mask << SMI_EN::GBL_SMI.shift,
        SMI_EN::EOS.mask << SMI_EN::EOS.shift,
        SMI_EN::BIOS.mask << SMI_EN::BIOS.shift,
        SMI_EN::LEGACY_USB.mask << SMI_EN::LEGACY_USB.shift,
        SMI_EN::ON_SLP_EN.mask << SMI_EN::ON_SLP_EN.shift,
        SMI_EN::APMC.mask << SMI_EN::APMC.shift,
        SMI_EN::SWSMI_TMR.mask << SMI_EN::SWSMI_TMR.shift,
        SMI_EN::BIOS_RLS.mask << SMI_EN::BIOS_RLS.shift,
        SMI_EN::MCSMI.mask << SMI_EN::MCSMI.shift,
        SMI_EN::TCO.mask << SMI_EN::TCO.shift,
        SMI_EN::PERIODIC.mask << SMI_EN::PERIODIC.shift,
        SMI_EN::LEGACY_USB2.mask << SMI_EN::LEGACY_USB2.shift,
        SMI_EN::INTEL_USB2.mask << SMI_EN::INTEL_USB2.shift,
        SMI_EN::GPIO_UNLOCK.mask << SMI_EN::GPIO_UNLOCK.shift,
        SMI_EN::ESPI.mask << SMI_EN::ESPI.shift,
        SMI_EN::LEGACY_USB3.mask << SMI_EN::LEGACY_USB3.shift,
    ]));
    assert!(disjoint(&[
        SMI_STS::BIOS.mask << SMI_STS::BIOS.shift,
        SMI_STS::ON_SLP_EN.mask << SMI_STS::ON_SLP_EN.shift,
        SMI_STS::APM.mask << SMI_STS::APM.shift,
        SMI_STS::SWSMI_TMR.mask << SMI_STS::SWSMI_TMR.shift,
        SMI_STS::MCSMI.mask << SMI_STS::MCSMI.shift,
        SMI_STS::TCO.mask << SMI_STS::TCO.shift,
        SMI_STS::PERIODIC.mask << SMI_STS::PERIODIC.shift,
        SMI_STS::SMBUS.mask << SMI_STS::SMBUS.shift,
    ]));
    assert!(disjoint(&[
        GPE0_EN_127_96::PME.mask << GPE0_EN_127_96::PME.shift,
        GPE0_EN_127_96::PME_B0.mask << GPE0_EN_127_96::PME_B0.shift,
    ]));
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_offsets_match_the_datasheet() {
        assert_eq!(PM1_STS.offset(), 0x00);
        assert_eq!(PM1_CNT.offset(), 0x04);
        assert_eq!(PM1_TMR.offset(), 0x08);
        assert_eq!(SMI_EN.offset(), 0x30);
        assert_eq!(SMI_STS.offset(), 0x34);
        assert_eq!(GPE_CNTL.offset(), 0x40);
        assert_eq!(OC_WDT_CTL.offset(), 0x54);
        assert_eq!(GPE0_STS_127_96.offset(), 0x6C);
        assert_eq!(GPE0_EN_127_96.offset(), 0x7C);
        assert_eq!(SMI_EN.size(), 4);
        assert_eq!(SMI_EN.space(), RegisterSpace::Io);
    }

    #[test]
    fn sleep_type_encodings_match_the_datasheet() {
        assert_eq!(u32::from(PM1_CNT::SLP_TYP::S0), 0x0000);
        assert_eq!(u32::from(PM1_CNT::SLP_TYP::S3), 0x1400);
        assert_eq!(u32::from(PM1_CNT::SLP_TYP::S4), 0x1800);
        assert_eq!(u32::from(PM1_CNT::SLP_TYP::S5), 0x1C00);
    }

    #[test]
    fn sleep_type_round_trips_through_the_field() {
        let mut cnt = Pm1CntVal::new(0);
        cnt.modify(PM1_CNT::SLP_TYP::S5);

        let slp_typ_mask = PM1_CNT::SLP_TYP.mask << PM1_CNT::SLP_TYP.shift;
        assert_eq!(cnt.get() & slp_typ_mask, 0x1C00);
        assert_eq!(cnt.read(PM1_CNT::SLP_TYP), 0b111);
        assert!(matches!(
            cnt.read_as_enum(PM1_CNT::SLP_TYP),
            Some(PM1_CNT::SLP_TYP::Value::S5)
        ));

        // Selecting a sleep type leaves SCI routing alone.
        assert!(!cnt.is_set(PM1_CNT::SCI_EN));

        cnt.modify(PM1_CNT::SLP_TYP::S3);
        assert!(matches!(
            cnt.read_as_enum(PM1_CNT::SLP_TYP),
            Some(PM1_CNT::SLP_TYP::Value::S3)
        ));
    }

    #[test]
    fn pm_timer_is_24_bits_wide() {
        let mask = PM1_TMR::TMR_VAL.mask << PM1_TMR::TMR_VAL.shift;
        assert_eq!(mask, 0xFF_FFFF);
        assert_eq!(PM1_TMR_ROLLOVER, mask + 1);

        // A counter one tick short of rollover wraps to zero.
        let wrapped = (mask + 1) & mask;
        assert_eq!(wrapped, 0);
    }

    #[test]
    fn smi_enable_bits_match_the_datasheet() {
        let mut en = SmiEnVal::new(0);
        en.modify(SMI_EN::GBL_SMI::SET);
        en.modify(SMI_EN::EOS::SET);
        en.modify(SMI_EN::TCO::SET);
        assert_eq!(en.get(), (1 << 0) | (1 << 1) | (1 << 13));

        assert_eq!(u32::from(SMI_EN::LEGACY_USB3::SET), 1 << 31);
        assert_eq!(u32::from(SMI_EN::GPIO_UNLOCK::SET), 1 << 27);
        assert_eq!(u32::from(SMI_EN::APMC::SET), 1 << 5);
    }

    #[test]
    fn smi_status_bits_match_the_datasheet() {
        let sts = SmiStsVal::new((1 << 16) | (1 << 5));
        assert!(sts.is_set(SMI_STS::SMBUS));
        assert!(sts.is_set(SMI_STS::APM));
        assert!(!sts.is_set(SMI_STS::TCO));
    }

    #[test]
    fn wake_enables_live_in_the_gpe0_high_dword() {
        assert_eq!(u32::from(GPE0_EN_127_96::PME::SET), 1 << 11);
        assert_eq!(u32::from(GPE0_EN_127_96::PME_B0::SET), 1 << 13);
    }
}
