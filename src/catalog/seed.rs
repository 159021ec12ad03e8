//! Hardcoded catalog data for initial setup

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::InventoryItem;

fn item(name: &str, description: &str, sku: &str, price: Decimal, quantity: u32) -> InventoryItem {
    InventoryItem::new(name, description, sku, price, quantity)
}

pub fn seed_items() -> Vec<InventoryItem> {
    vec![
        item("Hammer", "16oz claw hammer", "HAM-0001", dec!(14.99), 25),
        item("Hammer", "20oz framing hammer", "HAM-0002", dec!(19.99), 0),
        item("Hammer", "Sledgehammer 10lb", "HAM-0003", dec!(32.50), 7),
        item("Screwdriver", "Flathead 4-inch", "SDR-0004", dec!(4.25), 50),
        item("Screwdriver", "Phillips 3-inch", "SDR-0005", dec!(4.50), 42),
        item("Screwdriver", "Precision set (6pc)", "SDR-0006", dec!(9.75), 12),
        item("Drill", "Cordless 18V drill", "DRL-0007", dec!(59.99), 15),
        item("Drill", "Corded drill 500W", "DRL-0008", dec!(39.99), 5),
        item("Drill", "Drill bit set (20pc)", "DRL-0009", dec!(14.95), 0),
        item("Wrench", "Adjustable wrench 8-inch", "WRN-0010", dec!(7.99), 34),
        item("Wrench", "Socket set (24pc)", "WRN-0011", dec!(27.50), 13),
        item("Wrench", "Torque wrench", "WRN-0012", dec!(45.00), 6),
        item("Pliers", "Needle nose", "PLR-0013", dec!(6.75), 17),
        item("Pliers", "Slip joint", "PLR-0014", dec!(6.95), 28),
        item("Pliers", "Linesman", "PLR-0015", dec!(8.25), 11),
        item("Tape Measure", "25ft locking", "TPM-0016", dec!(5.99), 100),
        item("Tape Measure", "100ft open reel", "TPM-0017", dec!(15.99), 7),
        item("Level", "24-inch spirit level", "LVL-0018", dec!(12.99), 10),
        item("Level", "Laser level kit", "LVL-0019", dec!(49.99), 3),
        item("Utility Knife", "Retractable", "KNF-0020", dec!(4.99), 60),
        item("Utility Knife", "Folding pocket knife", "KNF-0021", dec!(6.25), 0),
        item("Saw", "Hand saw 15-inch", "SAW-0022", dec!(9.99), 19),
        item("Saw", "Hacksaw", "SAW-0023", dec!(7.99), 23),
        item("Saw", "Circular saw 7.25-inch", "SAW-0024", dec!(89.99), 4),
        item("Sander", "Orbital sander", "SND-0025", dec!(39.99), 6),
        item("Sander", "Belt sander", "SND-0026", dec!(44.99), 2),
        item("Clamp", "C-clamp 4-inch", "CLP-0027", dec!(3.25), 30),
        item("Clamp", "Bar clamp 12-inch", "CLP-0028", dec!(7.50), 14),
        item("Clamp", "Spring clamp", "CLP-0029", dec!(1.75), 40),
        item("Gloves", "Nitrile work gloves", "GLV-0030", dec!(1.50), 200),
        item("Gloves", "Leather palm gloves", "GLV-0031", dec!(3.25), 120),
        item("Gloves", "Cut-resistant gloves", "GLV-0032", dec!(6.75), 0),
        item("Goggles", "Safety goggles", "GOG-0033", dec!(4.50), 36),
        item("Goggles", "Anti-fog wraparound", "GOG-0034", dec!(6.25), 28),
        item("Helmet", "Hard hat - white", "HMT-0035", dec!(11.95), 20),
        item("Helmet", "Hard hat - yellow", "HMT-0036", dec!(11.95), 15),
        item("Mask", "Dust mask (box of 20)", "MSK-0037", dec!(14.99), 18),
        item("Mask", "Respirator w/ filters", "MSK-0038", dec!(24.99), 4),
        item("Toolbox", "Plastic toolbox 16-inch", "TLB-0039", dec!(12.95), 16),
        item("Toolbox", "Metal toolbox 20-inch", "TLB-0040", dec!(28.99), 0),
        item("Cord", "50ft extension cord", "CRD-0041", dec!(19.99), 8),
        item("Cord", "100ft extension cord", "CRD-0042", dec!(34.50), 0),
        item("Flashlight", "LED rechargeable", "FLS-0043", dec!(16.95), 11),
        item("Flashlight", "Mini pocket light", "FLS-0044", dec!(6.50), 29),
        item("Chisel", "Wood chisel set (4pc)", "CHS-0045", dec!(15.25), 10),
        item("Chisel", "Cold chisel 8-inch", "CHS-0046", dec!(5.99), 13),
        item("Brush", "Wire brush", "BRH-0047", dec!(2.25), 33),
        item("Brush", "Paint brush 2-inch", "BRH-0048", dec!(1.99), 48),
        item("Ladder", "6ft fiberglass ladder", "LDR-0049", dec!(79.99), 5),
        item("Ladder", "10ft aluminum ladder", "LDR-0050", dec!(119.99), 2),
        item("Wheelbarrow", "6 cu ft steel", "WBR-0051", dec!(89.99), 4),
        item("Concrete", "Quick-mix 80lb bag", "CNM-0052", dec!(6.50), 92),
        item("Nails", "3-inch framing nails (5lb)", "NAL-0053", dec!(7.99), 35),
        item("Screws", "1.25in wood screws (box)", "SCR-0054", dec!(5.25), 60),
        item("Bolts", "3/8\" hex bolts (box)", "BLT-0055", dec!(8.95), 45),
        item("Tarps", "10x12 waterproof tarp", "TRP-0056", dec!(9.99), 9),
        item("Paint", "Interior flat white (gal)", "PNT-0057", dec!(17.99), 26),
        item("Paint", "Exterior weatherproof (gal)", "PNT-0058", dec!(22.50), 14),
        item("Paint Roller", "9-inch roller set", "PNR-0059", dec!(7.95), 22),
        item("Paint Tray", "Plastic tray", "PNY-0060", dec!(2.75), 30),
        item("Caulk", "Silicone white", "CLK-0061", dec!(3.50), 80),
        item("Caulk Gun", "Dripless", "CLG-0062", dec!(6.99), 18),
        item("Putty Knife", "Flexible 3-inch", "PTK-0063", dec!(2.25), 27),
        item("Measuring Wheel", "Distance measuring wheel", "MWL-0064", dec!(49.99), 3),
        item("Stud Finder", "Electronic stud finder", "STF-0065", dec!(21.99), 6),
        item("Work Light", "Tripod LED light", "WKL-0066", dec!(34.99), 4),
        item("Angle Grinder", "4.5\" angle grinder", "ANG-0067", dec!(42.95), 8),
        item("Circular Saw Blade", "7.25\" 24T", "BLD-0068", dec!(9.25), 16),
        item("PVC Pipe", "1\" x 10ft", "PVC-0069", dec!(6.99), 42),
        item("Copper Pipe", "3/4\" x 10ft", "CPR-0070", dec!(22.00), 0),
        item("Pipe Wrench", "14-inch", "PWR-0071", dec!(18.50), 12),
        item("Trowel", "Masonry trowel", "TRW-0072", dec!(5.75), 20),
        item("Shovel", "Round point", "SHV-0073", dec!(14.99), 9),
        item("Pickaxe", "36\" handle", "PCK-0074", dec!(24.95), 3),
        item("Rake", "24-tine leaf rake", "RAK-0075", dec!(8.95), 10),
        item("Wheel", "Replacement wheel 10\"", "WHL-0076", dec!(11.50), 6),
        item("Fuel Can", "5-gallon red", "FLC-0077", dec!(17.99), 4),
        item("Toolbelt", "Leather 11-pocket", "TLB-0078", dec!(29.99), 15),
        item("Hose", "Contractor garden hose 50ft", "HSE-0079", dec!(21.95), 0),
        item("Hose Nozzle", "Adjustable spray", "HSN-0080", dec!(3.95), 24),
        item("Tarp Clips", "Heavy duty clips (4)", "TPC-0081", dec!(5.99), 13),
        item("Ratcheting Straps", "2\" x 27ft (2 pack)", "RTS-0082", dec!(18.50), 7),
        item("Plastic Sheeting", "6 mil 10x25ft", "PLS-0083", dec!(14.75), 5),
        item("Bucket", "5-gallon heavy-duty", "BKT-0084", dec!(3.50), 88),
        item("Work Shirt", "Hi-vis long sleeve", "WKS-0085", dec!(15.99), 20),
        item("Ear Protection", "Over-ear muffs", "EPR-0086", dec!(8.99), 17),
        item("Knee Pads", "Foam padded", "KNP-0087", dec!(9.50), 11),
        item("Fence Post", "Steel 6ft", "FCP-0088", dec!(7.25), 0),
        item("Rebar", "1/2\" x 10ft", "RBR-0089", dec!(6.50), 39),
        item("Lumber", "2x4x8 SPF stud", "LMB-0090", dec!(3.85), 94),
        item("Drywall", "1/2\" x 4x8 sheet", "DRW-0091", dec!(13.50), 40),
        item("Insulation", "R-13 Kraft roll", "INS-0092", dec!(34.99), 8),
        item("Roofing Nails", "1.25in coil (7200ct)", "RFN-0093", dec!(21.99), 26),
        item("PVC Cement", "8oz blue", "PVC-0094", dec!(4.99), 0),
        item("Paint Masker", "Tape + film tool", "PMK-0095", dec!(12.75), 10),
        item("Wire Spool", "14/2 Romex 50ft", "WIR-0096", dec!(36.50), 6),
        item("Breaker", "15 amp single pole", "BRK-0097", dec!(5.99), 17),
        item("Outlet Box", "PVC 1-gang", "OTB-0098", dec!(1.45), 60),
        item("Switch", "Single pole toggle", "SWT-0099", dec!(1.25), 80),
        item("Light Bulb", "LED A19 60W equivalent", "LBL-0100", dec!(1.99), 50),
        item("Extension Ladder", "24ft aluminum", "LAD-0101", dec!(179.00), 0),
    ]
}
