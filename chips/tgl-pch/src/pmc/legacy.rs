// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Flat register names following Intel's reference naming convention.
//!
//! Intel documentation and EDK2-style firmware name PMC registers as
//! `Prefix_Subsystem_Space_Register[_Field]`, where the prefix encodes
//! what the constant is:
//!
//! * `R_` - register offset
//! * `B_` - bit mask within a register
//! * `V_` - meaningful value within a field
//! * `S_` - register size in bytes
//! * `N_` - bit position
//!
//! These aliases exist so code written against that convention can be
//! ported without retranslating every symbol, and so the typed
//! definitions in [`acpi`](super::acpi), [`tco`](super::tco) and
//! [`pwrm`](super::pwrm) can be diffed against the reference lists bit
//! for bit. Every alias is checked against its typed counterpart at
//! compile time; new code should prefer the typed layer.

use super::{acpi, pwrm, tco};

//
// PMC SSRAM (D20:F2)
//
pub const PCI_DEVICE_NUMBER_PCH_PMC_SSRAM: u8 = 20;
pub const PCI_FUNCTION_NUMBER_PCH_PMC_SSRAM: u8 = 2;

//
// PMC (D31:F2)
//
pub const PCI_DEVICE_NUMBER_PCH_PMC: u8 = 31;
pub const PCI_FUNCTION_NUMBER_PCH_PMC: u8 = 2;

//
// ACPI and legacy I/O register offsets from ACPIBASE
//
pub const R_ACPI_IO_PM1_STS: u32 = 0x00;
pub const B_ACPI_IO_PM1_STS_RTC_EN: u32 = 1 << 26;
pub const B_ACPI_IO_PM1_STS_WAK: u32 = 1 << 15;
pub const B_ACPI_IO_PM1_STS_PRBTNOR: u32 = 1 << 11;
pub const B_ACPI_IO_PM1_STS_RTC: u32 = 1 << 10;
pub const B_ACPI_IO_PM1_STS_PWRBTN: u32 = 1 << 8;
pub const B_ACPI_IO_PM1_STS_GBL: u32 = 1 << 5;
pub const B_ACPI_IO_PM1_STS_TMROF: u32 = 1 << 0;

pub const B_ACPI_IO_PM1_EN_PWRBTN: u32 = 1 << 8;

pub const R_ACPI_IO_PM1_CNT: u32 = 0x04;
pub const B_ACPI_IO_PM1_CNT_SCI_EN: u32 = 1 << 0;
pub const B_ACPI_IO_PM1_CNT_SLP_TYP: u32 = (1 << 12) | (1 << 11) | (1 << 10);
pub const V_ACPI_IO_PM1_CNT_S0: u32 = 0;
pub const V_ACPI_IO_PM1_CNT_S3: u32 = (1 << 12) | (1 << 10);
pub const V_ACPI_IO_PM1_CNT_S4: u32 = (1 << 12) | (1 << 11);
pub const V_ACPI_IO_PM1_CNT_S5: u32 = (1 << 12) | (1 << 11) | (1 << 10);

pub const R_ACPI_IO_PM1_TMR: u32 = 0x08;
pub const V_ACPI_IO_PM1_TMR_FREQUENCY: u32 = 3_579_545;
pub const B_ACPI_IO_PM1_TMR_VAL: u32 = 0xFF_FFFF;
/// The timer is 24 bit, so it overflows at this count.
pub const V_ACPI_IO_PM1_TMR_MAX_VAL: u32 = 0x100_0000;

pub const R_ACPI_IO_SMI_EN: u32 = 0x30;
pub const S_ACPI_IO_SMI_EN: usize = 4;
pub const B_ACPI_IO_SMI_EN_LEGACY_USB3: u32 = 1 << 31;
pub const B_ACPI_IO_SMI_EN_GPIO_UNLOCK_SMI: u32 = 1 << 27;
pub const B_ACPI_IO_SMI_EN_LEGACY_USB2: u32 = 1 << 17;
pub const B_ACPI_IO_SMI_EN_PERIODIC: u32 = 1 << 14;
pub const B_ACPI_IO_SMI_EN_TCO: u32 = 1 << 13;
pub const B_ACPI_IO_SMI_EN_MCSMI: u32 = 1 << 11;
pub const B_ACPI_IO_SMI_EN_BIOS_RLS: u32 = 1 << 7;
pub const B_ACPI_IO_SMI_EN_SWSMI_TMR: u32 = 1 << 6;
pub const B_ACPI_IO_SMI_EN_APMC: u32 = 1 << 5;
pub const B_ACPI_IO_SMI_EN_ON_SLP_EN: u32 = 1 << 4;
pub const B_ACPI_IO_SMI_EN_LEGACY_USB: u32 = 1 << 3;
pub const B_ACPI_IO_SMI_EN_BIOS: u32 = 1 << 2;
pub const B_ACPI_IO_SMI_EN_EOS: u32 = 1 << 1;
pub const B_ACPI_IO_SMI_EN_GBL_SMI: u32 = 1 << 0;
pub const N_ACPI_IO_SMI_EN_LEGACY_USB3: u32 = 31;
pub const N_ACPI_IO_SMI_EN_ESPI: u32 = 28;
pub const N_ACPI_IO_SMI_EN_GPIO_UNLOCK: u32 = 27;
pub const N_ACPI_IO_SMI_EN_INTEL_USB2: u32 = 18;
pub const N_ACPI_IO_SMI_EN_LEGACY_USB2: u32 = 17;
pub const N_ACPI_IO_SMI_EN_PERIODIC: u32 = 14;
pub const N_ACPI_IO_SMI_EN_TCO: u32 = 13;
pub const N_ACPI_IO_SMI_EN_MCSMI: u32 = 11;
pub const N_ACPI_IO_SMI_EN_BIOS_RLS: u32 = 7;
pub const N_ACPI_IO_SMI_EN_SWSMI_TMR: u32 = 6;
pub const N_ACPI_IO_SMI_EN_APMC: u32 = 5;
pub const N_ACPI_IO_SMI_EN_ON_SLP_EN: u32 = 4;
pub const N_ACPI_IO_SMI_EN_LEGACY_USB: u32 = 3;
pub const N_ACPI_IO_SMI_EN_BIOS: u32 = 2;
pub const N_ACPI_IO_SMI_EN_EOS: u32 = 1;
pub const N_ACPI_IO_SMI_EN_GBL_SMI: u32 = 0;

pub const R_ACPI_IO_SMI_STS: u32 = 0x34;
pub const B_ACPI_IO_SMI_STS_SMBUS: u32 = 1 << 16;
pub const B_ACPI_IO_SMI_STS_PERIODIC: u32 = 1 << 14;
pub const B_ACPI_IO_SMI_STS_TCO: u32 = 1 << 13;
pub const B_ACPI_IO_SMI_STS_MCSMI: u32 = 1 << 11;
pub const B_ACPI_IO_SMI_STS_SWSMI_TMR: u32 = 1 << 6;
pub const B_ACPI_IO_SMI_STS_APM: u32 = 1 << 5;
pub const B_ACPI_IO_SMI_STS_ON_SLP_EN: u32 = 1 << 4;
pub const B_ACPI_IO_SMI_STS_BIOS: u32 = 1 << 2;

pub const R_ACPI_IO_GPE_CNTL: u32 = 0x40;

pub const R_ACPI_IO_OC_WDT_CTL: u32 = 0x54;

pub const R_ACPI_IO_GPE0_STS_127_96: u32 = 0x6C;

pub const R_ACPI_IO_GPE0_EN_127_96: u32 = 0x7C;
pub const B_ACPI_IO_GPE0_EN_127_96_PME_B0: u32 = 1 << 13;
pub const B_ACPI_IO_GPE0_EN_127_96_PME: u32 = 1 << 11;

//
// TCO register I/O map, offsets from TCOBASE
//
pub const R_TCO_IO_TCO1_STS: u32 = 0x04;

//
// PWRM registers for the IPC interface
//
pub const R_PMC_PWRM_IPC_CMD: u32 = 0x00;
pub const N_PMC_PWRM_IPC_CMD_CMD_ID: u32 = 12;
pub const N_PMC_PWRM_IPC_CMD_SIZE: u32 = 16;
pub const N_PMC_PWRM_IPC_CMD_COMMAND: u32 = 0;
/// IPC command programming source clock and port mapping.
pub const V_PMC_PWRM_IPC_SRC_CLK_PORT_MAPPING_CMD: u32 = 0xAC;
pub const R_PMC_PWRM_IPC_STS: u32 = 0x04;
pub const R_PMC_PWRM_IPC_WBUF0: u32 = 0x80;
pub const R_PMC_PWRM_IPC_WBUF1: u32 = 0x84;
pub const R_PMC_PWRM_IPC_WBUF2: u32 = 0x88;
pub const R_PMC_PWRM_IPC_WBUF3: u32 = 0x8C;
pub const R_PMC_PWRM_IPC_RBUF0: u32 = 0x90;
pub const R_PMC_PWRM_IPC_RBUF1: u32 = 0x94;
pub const R_PMC_PWRM_IPC_RBUF2: u32 = 0x98;
pub const R_PMC_PWRM_IPC_RBUF3: u32 = 0x9C;

//
// PWRM registers
//
pub const R_PMC_PWRM_GEN_PMCON_A: u32 = 0x1020;
pub const B_PMC_PWRM_GEN_PMCON_A_GBL_RST_STS: u32 = 1 << 24;
pub const B_PMC_PWRM_GEN_PMCON_A_PWR_FLR: u32 = 1 << 14;
pub const B_PMC_PWRM_GEN_PMCON_A_HOST_RST_STS: u32 = 1 << 9;

pub const R_PMC_PWRM_GEN_PMCON_B: u32 = 0x1024;
pub const B_PMC_PWRM_GEN_PMCON_B_SMI_LOCK: u32 = 1 << 4;
pub const B_PMC_PWRM_GEN_PMCON_B_RTC_PWR_STS: u32 = 1 << 2;

pub const B_PMC_PWRM_THROT_1_VR_ALERT: u32 = 1 << 0;

pub const R_PMC_PWRM_MODPHY_PM_CFG5: u32 = 0x10D0;
pub const R_PMC_PWRM_MODPHY_PM_CFG6: u32 = 0x10D4;

pub const R_PMC_PWRM_TIMED_GPIO_CONTROL_0: u32 = 0x1210;
pub const R_PMC_PWRM_TIMED_GPIO_CONTROL_1: u32 = 0x1310;

pub const R_PMC_PWRM_THERMAL_TSS0: u32 = 0x1560;
pub const B_PMC_PWRM_THERMAL_TSS0_TSR_MASK: u32 = 0x1FF;

pub const R_PMC_PWRM_WADT_AC: u32 = 0x1800;

pub const R_PMC_PWRM_CFG: u32 = 0x1818;

pub const R_PMC_PWRM_SLP_S0_RESIDENCY_COUNTER: u32 = 0x193C;

pub const R_PMC_PWRM_CFG4: u32 = 0x18E8;

pub const R_PMC_PWRM_1B1C: u32 = 0x1B1C;
pub const R_PMC_PWRM_1BD0: u32 = 0x1BD0;

pub const R_PMC_PWRM_ST_PG_FDIS_PMC_1: u32 = 0x1E20;
pub const R_PMC_PWRM_NST_PG_FDIS_1: u32 = 0x1E28;

/// Low Power Mode requirements block length in bytes.
pub const PMC_LPM_REQ_DATA_LEN: usize = 192;

/// Low Power Mode requirements block length in bits.
pub const PMC_LPM_REQ_BITS_DATA_LEN: usize = 1536;

// Offset and size aliases must agree with the typed descriptors.
const _: () = {
    assert!(R_ACPI_IO_PM1_STS == acpi::PM1_STS.offset());
    assert!(R_ACPI_IO_PM1_CNT == acpi::PM1_CNT.offset());
    assert!(R_ACPI_IO_PM1_TMR == acpi::PM1_TMR.offset());
    assert!(R_ACPI_IO_SMI_EN == acpi::SMI_EN.offset());
    assert!(S_ACPI_IO_SMI_EN == acpi::SMI_EN.size());
    assert!(R_ACPI_IO_SMI_STS == acpi::SMI_STS.offset());
    assert!(R_ACPI_IO_GPE_CNTL == acpi::GPE_CNTL.offset());
    assert!(R_ACPI_IO_OC_WDT_CTL == acpi::OC_WDT_CTL.offset());
    assert!(R_ACPI_IO_GPE0_STS_127_96 == acpi::GPE0_STS_127_96.offset());
    assert!(R_ACPI_IO_GPE0_EN_127_96 == acpi::GPE0_EN_127_96.offset());
    assert!(R_TCO_IO_TCO1_STS == tco::TCO1_STS.offset());
    assert!(R_PMC_PWRM_IPC_CMD == pwrm::IPC_CMD.offset());
    assert!(R_PMC_PWRM_IPC_STS == pwrm::IPC_STS.offset());
    assert!(R_PMC_PWRM_IPC_WBUF0 == pwrm::IPC_WBUF[0].offset());
    assert!(R_PMC_PWRM_IPC_WBUF1 == pwrm::IPC_WBUF[1].offset());
    assert!(R_PMC_PWRM_IPC_WBUF2 == pwrm::IPC_WBUF[2].offset());
    assert!(R_PMC_PWRM_IPC_WBUF3 == pwrm::IPC_WBUF[3].offset());
    assert!(R_PMC_PWRM_IPC_RBUF0 == pwrm::IPC_RBUF[0].offset());
    assert!(R_PMC_PWRM_IPC_RBUF1 == pwrm::IPC_RBUF[1].offset());
    assert!(R_PMC_PWRM_IPC_RBUF2 == pwrm::IPC_RBUF[2].offset());
    assert!(R_PMC_PWRM_IPC_RBUF3 == pwrm::IPC_RBUF[3].offset());
    assert!(R_PMC_PWRM_GEN_PMCON_A == pwrm::GEN_PMCON_A.offset());
    assert!(R_PMC_PWRM_GEN_PMCON_B == pwrm::GEN_PMCON_B.offset());
    assert!(R_PMC_PWRM_MODPHY_PM_CFG5 == pwrm::MODPHY_PM_CFG5.offset());
    assert!(R_PMC_PWRM_MODPHY_PM_CFG6 == pwrm::MODPHY_PM_CFG6.offset());
    assert!(R_PMC_PWRM_TIMED_GPIO_CONTROL_0 == pwrm::TIMED_GPIO_CONTROL_0.offset());
    assert!(R_PMC_PWRM_TIMED_GPIO_CONTROL_1 == pwrm::TIMED_GPIO_CONTROL_1.offset());
    assert!(R_PMC_PWRM_THERMAL_TSS0 == pwrm::THERMAL_TSS0.offset());
    assert!(R_PMC_PWRM_WADT_AC == pwrm::WADT_AC.offset());
    assert!(R_PMC_PWRM_CFG == pwrm::CFG.offset());
    assert!(R_PMC_PWRM_CFG4 == pwrm::CFG4.offset());
    assert!(R_PMC_PWRM_SLP_S0_RESIDENCY_COUNTER == pwrm::SLP_S0_RESIDENCY_COUNTER.offset());
    assert!(R_PMC_PWRM_1B1C == pwrm::REG_1B1C.offset());
    assert!(R_PMC_PWRM_1BD0 == pwrm::REG_1BD0.offset());
    assert!(R_PMC_PWRM_ST_PG_FDIS_PMC_1 == pwrm::ST_PG_FDIS_PMC_1.offset());
    assert!(R_PMC_PWRM_NST_PG_FDIS_1 == pwrm::NST_PG_FDIS_1.offset());
    assert!(PMC_LPM_REQ_DATA_LEN == pwrm::LPM_REQ_DATA_LEN);
    assert!(PMC_LPM_REQ_BITS_DATA_LEN == pwrm::LPM_REQ_BITS_DATA_LEN);
};

// Each bit position alias must address the same bit as its mask alias.
const _: () = {
    assert!(B_ACPI_IO_SMI_EN_LEGACY_USB3 == 1 << N_ACPI_IO_SMI_EN_LEGACY_USB3);
    assert!(B_ACPI_IO_SMI_EN_GPIO_UNLOCK_SMI == 1 << N_ACPI_IO_SMI_EN_GPIO_UNLOCK);
    assert!(B_ACPI_IO_SMI_EN_LEGACY_USB2 == 1 << N_ACPI_IO_SMI_EN_LEGACY_USB2);
    assert!(B_ACPI_IO_SMI_EN_PERIODIC == 1 << N_ACPI_IO_SMI_EN_PERIODIC);
    assert!(B_ACPI_IO_SMI_EN_TCO == 1 << N_ACPI_IO_SMI_EN_TCO);
    assert!(B_ACPI_IO_SMI_EN_MCSMI == 1 << N_ACPI_IO_SMI_EN_MCSMI);
    assert!(B_ACPI_IO_SMI_EN_BIOS_RLS == 1 << N_ACPI_IO_SMI_EN_BIOS_RLS);
    assert!(B_ACPI_IO_SMI_EN_SWSMI_TMR == 1 << N_ACPI_IO_SMI_EN_SWSMI_TMR);
    assert!(B_ACPI_IO_SMI_EN_APMC == 1 << N_ACPI_IO_SMI_EN_APMC);
    assert!(B_ACPI_IO_SMI_EN_ON_SLP_EN == 1 << N_ACPI_IO_SMI_EN_ON_SLP_EN);
    assert!(B_ACPI_IO_SMI_EN_LEGACY_USB == 1 << N_ACPI_IO_SMI_EN_LEGACY_USB);
    assert!(B_ACPI_IO_SMI_EN_BIOS == 1 << N_ACPI_IO_SMI_EN_BIOS);
    assert!(B_ACPI_IO_SMI_EN_EOS == 1 << N_ACPI_IO_SMI_EN_EOS);
    assert!(B_ACPI_IO_SMI_EN_GBL_SMI == 1 << N_ACPI_IO_SMI_EN_GBL_SMI);

    // ESPI and INTEL_USB2 have no mask alias; check them against the
    // typed fields directly.
    assert!(N_ACPI_IO_SMI_EN_ESPI == acpi::SMI_EN::ESPI.shift as u32);
    assert!(N_ACPI_IO_SMI_EN_INTEL_USB2 == acpi::SMI_EN::INTEL_USB2.shift as u32);
};

// Mask aliases must agree with the typed bitfields.
const _: () = {
    assert!(B_ACPI_IO_PM1_STS_RTC_EN == acpi::PM1_STS::RTC_EN.mask << acpi::PM1_STS::RTC_EN.shift);
    assert!(B_ACPI_IO_PM1_STS_WAK == acpi::PM1_STS::WAK.mask << acpi::PM1_STS::WAK.shift);
    assert!(
        B_ACPI_IO_PM1_STS_PRBTNOR == acpi::PM1_STS::PRBTNOR.mask << acpi::PM1_STS::PRBTNOR.shift
    );
    assert!(B_ACPI_IO_PM1_STS_RTC == acpi::PM1_STS::RTC.mask << acpi::PM1_STS::RTC.shift);
    assert!(B_ACPI_IO_PM1_STS_PWRBTN == acpi::PM1_STS::PWRBTN.mask << acpi::PM1_STS::PWRBTN.shift);
    assert!(B_ACPI_IO_PM1_STS_GBL == acpi::PM1_STS::GBL.mask << acpi::PM1_STS::GBL.shift);
    assert!(B_ACPI_IO_PM1_STS_TMROF == acpi::PM1_STS::TMROF.mask << acpi::PM1_STS::TMROF.shift);
    assert!(B_ACPI_IO_PM1_EN_PWRBTN == acpi::PM1_EN::PWRBTN.mask << acpi::PM1_EN::PWRBTN.shift);
    assert!(B_ACPI_IO_PM1_CNT_SCI_EN == acpi::PM1_CNT::SCI_EN.mask << acpi::PM1_CNT::SCI_EN.shift);
    assert!(
        B_ACPI_IO_PM1_CNT_SLP_TYP == acpi::PM1_CNT::SLP_TYP.mask << acpi::PM1_CNT::SLP_TYP.shift
    );
    assert!(B_ACPI_IO_PM1_TMR_VAL == acpi::PM1_TMR::TMR_VAL.mask << acpi::PM1_TMR::TMR_VAL.shift);
    assert!(
        B_ACPI_IO_SMI_EN_GBL_SMI == acpi::SMI_EN::GBL_SMI.mask << acpi::SMI_EN::GBL_SMI.shift
    );
    assert!(B_ACPI_IO_SMI_EN_EOS == acpi::SMI_EN::EOS.mask << acpi::SMI_EN::EOS.shift);
    assert!(B_ACPI_IO_SMI_EN_BIOS == acpi::SMI_EN::BIOS.mask << acpi::SMI_EN::BIOS.shift);
    assert!(
        B_ACPI_IO_SMI_EN_LEGACY_USB
            == acpi::SMI_EN::LEGACY_USB.mask << acpi::SMI_EN::LEGACY_USB.shift
    );
    assert!(
        B_ACPI_IO_SMI_EN_ON_SLP_EN == acpi::SMI_EN::ON_SLP_EN.mask << acpi::SMI_EN::ON_SLP_EN.shift
    );
    assert!(B_ACPI_IO_SMI_EN_APMC == acpi::SMI_EN::APMC.mask << acpi::SMI_EN::APMC.shift);
    assert!(
        B_ACPI_IO_SMI_EN_SWSMI_TMR == acpi::SMI_EN::SWSMI_TMR.mask << acpi::SMI_EN::SWSMI_TMR.shift
    );
    assert!(
        B_ACPI_IO_SMI_EN_BIOS_RLS == acpi::SMI_EN::BIOS_RLS.mask << acpi::SMI_EN::BIOS_RLS.shift
    );
    assert!(B_ACPI_IO_SMI_EN_MCSMI == acpi::SMI_EN::MCSMI.mask << acpi::SMI_EN::MCSMI.shift);
    assert!(B_ACPI_IO_SMI_EN_TCO == acpi::SMI_EN::TCO.mask << acpi::SMI_EN::TCO.shift);
    assert!(
        B_ACPI_IO_SMI_EN_PERIODIC == acpi::SMI_EN::PERIODIC.mask << acpi::SMI_EN::PERIODIC.shift
    );
    assert!(
        B_ACPI_IO_SMI_EN_LEGACY_USB2
            == acpi::SMI_EN::LEGACY_USB2.mask << acpi::SMI_EN::LEGACY_USB2.shift
    );
    assert!(
        B_ACPI_IO_SMI_EN_GPIO_UNLOCK_SMI
            == acpi::SMI_EN::GPIO_UNLOCK.mask << acpi::SMI_EN::GPIO_UNLOCK.shift
    );
    assert!(
        B_ACPI_IO_SMI_EN_LEGACY_USB3
            == acpi::SMI_EN::LEGACY_USB3.mask << acpi::SMI_EN::LEGACY_USB3.shift
    );
    assert!(B_ACPI_IO_SMI_STS_SMBUS == acpi::SMI_STS::SMBUS.mask << acpi::SMI_STS::SMBUS.shift);
    assert!(
        B_ACPI_IO_SMI_STS_PERIODIC == acpi::SMI_STS::PERIODIC.mask << acpi::SMI_STS::PERIODIC.shift
    );
    assert!(B_ACPI_IO_SMI_STS_TCO == acpi::SMI_STS::TCO.mask << acpi::SMI_STS::TCO.shift);
    assert!(B_ACPI_IO_SMI_STS_MCSMI == acpi::SMI_STS::MCSMI.mask << acpi::SMI_STS::MCSMI.shift);
    assert!(
        B_ACPI_IO_SMI_STS_SWSMI_TMR
            == acpi::SMI_STS::SWSMI_TMR.mask << acpi::SMI_STS::SWSMI_TMR.shift
    );
    assert!(B_ACPI_IO_SMI_STS_APM == acpi::SMI_STS::APM.mask << acpi::SMI_STS::APM.shift);
    assert!(
        B_ACPI_IO_SMI_STS_ON_SLP_EN
            == acpi::SMI_STS::ON_SLP_EN.mask << acpi::SMI_STS::ON_SLP_EN.shift
    );
    assert!(B_ACPI_IO_SMI_STS_BIOS == acpi::SMI_STS::BIOS.mask << acpi::SMI_STS::BIOS.shift);
    assert!(
        B_ACPI_IO_GPE0_EN_127_96_PME
            == acpi::GPE0_EN_127_96::PME.mask << acpi::GPE0_EN_127_96::PME.shift
    );
    assert!(
        B_ACPI_IO_GPE0_EN_127_96_PME_B0
            == acpi::GPE0_EN_127_96::PME_B0.mask << acpi::GPE0_EN_127_96::PME_B0.shift
    );
    assert!(
        B_PMC_PWRM_GEN_PMCON_A_GBL_RST_STS
            == pwrm::GEN_PMCON_A::GBL_RST_STS.mask << pwrm::GEN_PMCON_A::GBL_RST_STS.shift
    );
    assert!(
        B_PMC_PWRM_GEN_PMCON_A_PWR_FLR
            == pwrm::GEN_PMCON_A::PWR_FLR.mask << pwrm::GEN_PMCON_A::PWR_FLR.shift
    );
    assert!(
        B_PMC_PWRM_GEN_PMCON_A_HOST_RST_STS
            == pwrm::GEN_PMCON_A::HOST_RST_STS.mask << pwrm::GEN_PMCON_A::HOST_RST_STS.shift
    );
    assert!(
        B_PMC_PWRM_GEN_PMCON_B_SMI_LOCK
            == pwrm::GEN_PMCON_B::SMI_LOCK.mask << pwrm::GEN_PMCON_B::SMI_LOCK.shift
    );
    assert!(
        B_PMC_PWRM_GEN_PMCON_B_RTC_PWR_STS
            == pwrm::GEN_PMCON_B::RTC_PWR_STS.mask << pwrm::GEN_PMCON_B::RTC_PWR_STS.shift
    );
    assert!(
        B_PMC_PWRM_THROT_1_VR_ALERT
            == pwrm::THROT_1::VR_ALERT.mask << pwrm::THROT_1::VR_ALERT.shift
    );
    assert!(
        B_PMC_PWRM_THERMAL_TSS0_TSR_MASK
            == pwrm::THERMAL_TSS0::TSR.mask << pwrm::THERMAL_TSS0::TSR.shift
    );
};

// Sleep type values and the IPC field positions must line up with the
// typed layer as well.
const _: () = {
    let slp_typ_shift = acpi::PM1_CNT::SLP_TYP.shift;
    assert!(V_ACPI_IO_PM1_CNT_S0 == 0b000 << slp_typ_shift);
    assert!(V_ACPI_IO_PM1_CNT_S3 == 0b101 << slp_typ_shift);
    assert!(V_ACPI_IO_PM1_CNT_S4 == 0b110 << slp_typ_shift);
    assert!(V_ACPI_IO_PM1_CNT_S5 == 0b111 << slp_typ_shift);
    assert!((V_ACPI_IO_PM1_CNT_S5 & !B_ACPI_IO_PM1_CNT_SLP_TYP) == 0);

    assert!(N_PMC_PWRM_IPC_CMD_COMMAND == pwrm::IPC_CMD::COMMAND.shift as u32);
    assert!(N_PMC_PWRM_IPC_CMD_CMD_ID == pwrm::IPC_CMD::CMD_ID.shift as u32);
    assert!(N_PMC_PWRM_IPC_CMD_SIZE == pwrm::IPC_CMD::SIZE.shift as u32);
    assert!(
        V_PMC_PWRM_IPC_SRC_CLK_PORT_MAPPING_CMD <= pwrm::IPC_CMD::COMMAND.mask,
        "command opcode must fit the COMMAND field"
    );
};

// The 24 bit timer overflows one count past its mask.
const _: () = assert!(V_ACPI_IO_PM1_TMR_MAX_VAL == B_ACPI_IO_PM1_TMR_VAL + 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pm1_control_sleep_values() {
        assert_eq!(R_ACPI_IO_PM1_CNT, 0x04);
        assert_eq!(B_ACPI_IO_PM1_CNT_SLP_TYP, 0x1C00);
        assert_eq!(V_ACPI_IO_PM1_CNT_S0, 0x0000);
        assert_eq!(V_ACPI_IO_PM1_CNT_S3, 0x1400);
        assert_eq!(V_ACPI_IO_PM1_CNT_S4, 0x1800);
        assert_eq!(V_ACPI_IO_PM1_CNT_S5, 0x1C00);

        // Writing S5 into the field and masking it back recovers S5.
        let written = V_ACPI_IO_PM1_CNT_S5;
        assert_eq!(written & B_ACPI_IO_PM1_CNT_SLP_TYP, V_ACPI_IO_PM1_CNT_S5);
    }

    #[test]
    fn pm_timer_values() {
        assert_eq!(R_ACPI_IO_PM1_TMR, 0x08);
        assert_eq!(V_ACPI_IO_PM1_TMR_FREQUENCY, 3_579_545);
        assert_eq!(B_ACPI_IO_PM1_TMR_VAL, 0xFF_FFFF);
        assert_eq!(V_ACPI_IO_PM1_TMR_MAX_VAL, 0x100_0000);
        assert_eq!(V_ACPI_IO_PM1_TMR_MAX_VAL, B_ACPI_IO_PM1_TMR_VAL + 1);
    }

    #[test]
    fn smi_enable_values() {
        assert_eq!(R_ACPI_IO_SMI_EN, 0x30);
        assert_eq!(S_ACPI_IO_SMI_EN, 4);
        assert_eq!(B_ACPI_IO_SMI_EN_GBL_SMI, 0x1);
        assert_eq!(B_ACPI_IO_SMI_EN_TCO, 0x2000);
        assert_eq!(B_ACPI_IO_SMI_EN_LEGACY_USB3, 0x8000_0000);
        assert_eq!(N_ACPI_IO_SMI_EN_ESPI, 28);
        assert_eq!(N_ACPI_IO_SMI_EN_INTEL_USB2, 18);
    }

    #[test]
    fn pwrm_window_values() {
        assert_eq!(R_PMC_PWRM_GEN_PMCON_A, 0x1020);
        assert_eq!(B_PMC_PWRM_GEN_PMCON_A_GBL_RST_STS, 0x0100_0000);
        assert_eq!(R_PMC_PWRM_THERMAL_TSS0, 0x1560);
        assert_eq!(B_PMC_PWRM_THERMAL_TSS0_TSR_MASK, 0x1FF);
        assert_eq!(R_PMC_PWRM_ST_PG_FDIS_PMC_1, 0x1E20);
        assert_eq!(R_PMC_PWRM_NST_PG_FDIS_1, 0x1E28);
    }

    #[test]
    fn ipc_mailbox_values() {
        assert_eq!(R_PMC_PWRM_IPC_CMD, 0x00);
        assert_eq!(N_PMC_PWRM_IPC_CMD_COMMAND, 0);
        assert_eq!(N_PMC_PWRM_IPC_CMD_CMD_ID, 12);
        assert_eq!(N_PMC_PWRM_IPC_CMD_SIZE, 16);
        assert_eq!(V_PMC_PWRM_IPC_SRC_CLK_PORT_MAPPING_CMD, 0xAC);

        // Buffer dwords are contiguous, with the read buffer following
        // the write buffer.
        assert_eq!(R_PMC_PWRM_IPC_WBUF3 - R_PMC_PWRM_IPC_WBUF0, 12);
        assert_eq!(R_PMC_PWRM_IPC_RBUF0 - R_PMC_PWRM_IPC_WBUF0, 0x10);
    }

    #[test]
    fn lpm_requirement_lengths() {
        assert_eq!(PMC_LPM_REQ_DATA_LEN, 192);
        assert_eq!(PMC_LPM_REQ_BITS_DATA_LEN, 1536);
        assert_eq!(PMC_LPM_REQ_BITS_DATA_LEN, 8 * PMC_LPM_REQ_DATA_LEN);
    }

    #[test]
    fn pci_locators() {
        assert_eq!(PCI_DEVICE_NUMBER_PCH_PMC, 31);
        assert_eq!(PCI_FUNCTION_NUMBER_PCH_PMC, 2);
        assert_eq!(PCI_DEVICE_NUMBER_PCH_PMC_SSRAM, 20);
        assert_eq!(PCI_FUNCTION_NUMBER_PCH_PMC_SSRAM, 2);
    }
}
