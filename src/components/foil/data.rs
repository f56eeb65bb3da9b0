//! Built-in foil coefficient tables.
//!
//! The generic family holds one 15-point polar per reference foil, indexed
//! `[thickness band][camber band][aoa sample]` with thickness bands
//! 5/10/15/20 % and camber bands 0/5/10/15/20 %. Named tables follow the
//! `GRID_15` / `GRID_25` sampling. All data are at a Reynolds number of 1e6.

use super::tabulated::PolarData;

pub(crate) const THICKNESS_BANDS: [f64; 4] = [5.0, 10.0, 15.0, 20.0];
pub(crate) const CAMBER_BANDS: [f64; 5] = [0.0, 5.0, 10.0, 15.0, 20.0];

pub(crate) const GENERIC_CL: [[[f64; 15]; 5]; 4] = [
    [
        [
            -0.76205, -0.79632, -0.87105, -1.02555, -0.95975, -0.74257, -0.41361, 0.00000,
            0.41361, 0.74257, 0.95975, 1.02555, 0.87105, 0.79632, 0.76205,
        ],
        [
            -0.71454, -0.79605, -0.96347, -0.87956, -0.68334, -0.36199, 0.05379, 0.46763,
            0.81313, 1.06514, 1.12245, 0.98711, 0.92450, 0.89818, 0.88812,
        ],
        [
            -0.71244, -0.87027, -0.79222, -0.62164, -0.31037, 0.10749, 0.52132, 0.87821,
            1.15608, 1.19556, 1.08342, 1.03729, 1.02274, 1.02103, 1.02347,
        ],
        [
            -0.74786, -0.69540, -0.55613, -0.25875, 0.16108, 0.57483, 0.93993, 1.23737,
            1.25207, 1.16406, 1.13626, 1.13569, 1.14452, 1.15479, 1.16360,
        ],
        [
            -0.58631, -0.48449, -0.20712, 0.21458, 0.62821, 0.99949, 1.31206, 1.29711, 1.23262,
            1.22346, 1.23778, 1.25846, 1.27801, 1.29395, 1.30604,
        ],
    ],
    [
        [
            -0.90225, -0.94876, -1.05243, -1.21602, -1.04732, -0.78722, -0.42789, 0.00000,
            0.42789, 0.78722, 1.04732, 1.21602, 1.05243, 0.94876, 0.90225,
        ],
        [
            -0.87511, -0.99013, -1.12504, -0.97632, -0.73087, -0.37493, 0.05511, 0.48250,
            0.85248, 1.13892, 1.34213, 1.15206, 1.06468, 1.02932, 1.01723,
        ],
        [
            -0.91958, -1.02730, -0.90111, -0.67355, -0.32192, 0.11013, 0.53702, 0.91464,
            1.22092, 1.39706, 1.23393, 1.16579, 1.14446, 1.14268, 1.14741,
        ],
        [
            -0.92146, -0.82026, -0.61481, -0.26885, 0.16506, 0.59147, 0.97482, 1.29638,
            1.43835, 1.30225, 1.25432, 1.24843, 1.25856, 1.27244, 1.28515,
        ],
        [
            -0.73182, -0.55394, -0.21568, 0.21991, 0.64588, 1.03365, 1.36723, 1.47042, 1.36038,
            1.33250, 1.34242, 1.36527, 1.38933, 1.41011, 1.42652,
        ],
    ],
    [
        [
            -1.04225, -1.10627, -1.25107, -1.32749, -1.12032, -0.82462, -0.44087, 0.00000,
            0.44087, 0.82462, 1.12032, 1.32749, 1.25107, 1.10627, 1.04225,
        ],
        [
            -1.04183, -1.20279, -1.24568, -1.05483, -0.76913, -0.38646, 0.05642, 0.49647,
            0.88717, 1.20287, 1.43914, 1.33422, 1.20968, 1.15968, 1.14357,
        ],
        [
            -1.14728, -1.15909, -0.98691, -0.71329, -0.33194, 0.11277, 0.55204, 0.94793,
            1.27897, 1.53890, 1.40174, 1.29940, 1.26547, 1.26134, 1.26784,
        ],
        [
            -1.06664, -0.91581, -0.65695, -0.27730, 0.16904, 0.60760, 1.00749, 1.35056,
            1.62984, 1.45768, 1.37791, 1.36088, 1.36982, 1.38652, 1.40320,
        ],
        [
            -0.84044, -0.59991, -0.22249, 0.22522, 0.66314, 1.06621, 1.41891, 1.68070, 1.50511,
            1.44741, 1.44728, 1.46969, 1.49730, 1.52279, 1.54379,
        ],
    ],
    [
        [
            -1.18421, -1.27401, -1.47747, -1.42473, -1.18321, -0.85745, -0.45310, 0.00000,
            0.45310, 0.85745, 1.18321, 1.42473, 1.47747, 1.27401, 1.18421,
        ],
        [
            -1.21976, -1.44492, -1.34940, -1.12085, -0.80181, -0.39721, 0.05774, 0.50986,
            0.91876, 1.25984, 1.52566, 1.54353, 1.36478, 1.29181, 1.26816,
        ],
        [
            -1.40648, -1.27078, -1.05713, -0.74606, -0.34118, 0.11541, 0.56661, 0.97903,
            1.33208, 1.61772, 1.59601, 1.44315, 1.38844, 1.37830, 1.38524,
        ],
        [
            -1.18814, -0.99164, -0.69015, -0.28499, 0.17300, 0.62336, 1.03857, 1.40116,
            1.70312, 1.63869, 1.51168, 1.47561, 1.47965, 1.49772, 1.51801,
        ],
        [
            -0.92382, -0.63405, -0.22860, 0.23051, 0.68010, 1.09757, 1.46793, 1.78345, 1.67436,
            1.57244, 1.55475, 1.57308, 1.60269, 1.63240, 1.65803,
        ],
    ],
];

pub(crate) const GENERIC_CD: [[[f64; 15]; 5]; 4] = [
    [
        [
            0.19726, 0.12696, 0.06829, 0.02232, 0.01370, 0.01111, 0.00845, 0.00725, 0.00845,
            0.01111, 0.01370, 0.02232, 0.06829, 0.12696, 0.19726,
        ],
        [
            0.12515, 0.06835, 0.02479, 0.02071, 0.01747, 0.01331, 0.01009, 0.00928, 0.01044,
            0.01235, 0.02597, 0.07421, 0.13468, 0.20653, 0.28894,
        ],
        [
            0.06990, 0.03078, 0.02900, 0.02540, 0.01988, 0.01461, 0.01179, 0.01129, 0.01214,
            0.03096, 0.08136, 0.14356, 0.21689, 0.30062, 0.39387,
        ],
        [
            0.03981, 0.03840, 0.03484, 0.02815, 0.02081, 0.01599, 0.01372, 0.01326, 0.03762,
            0.08998, 0.15378, 0.22849, 0.31346, 0.40781, 0.51050,
        ],
        [
            0.04871, 0.04567, 0.03811, 0.02869, 0.02186, 0.01777, 0.01583, 0.04615, 0.10027,
            0.16549, 0.24146, 0.32755, 0.42293, 0.52651, 0.63706,
        ],
    ],
    [
        [
            0.17740, 0.11075, 0.05623, 0.01935, 0.01668, 0.01334, 0.01028, 0.00900, 0.01028,
            0.01334, 0.01668, 0.01935, 0.05623, 0.11075, 0.17740,
        ],
        [
            0.11020, 0.05781, 0.02728, 0.02426, 0.01995, 0.01520, 0.01183, 0.01105, 0.01243,
            0.01482, 0.01721, 0.06080, 0.11734, 0.18565, 0.26484,
        ],
        [
            0.06098, 0.03637, 0.03326, 0.02820, 0.02181, 0.01633, 0.01348, 0.01309, 0.01424,
            0.02059, 0.06671, 0.12515, 0.19505, 0.27562, 0.36602,
        ],
        [
            0.04650, 0.04357, 0.03805, 0.03010, 0.02250, 0.01759, 0.01535, 0.01507, 0.02576,
            0.07419, 0.13439, 0.20574, 0.28760, 0.37915, 0.47938,
        ],
        [
            0.05506, 0.04948, 0.04008, 0.03033, 0.02337, 0.01925, 0.01738, 0.03294, 0.08343,
            0.14519, 0.21786, 0.30089, 0.39350, 0.49466, 0.60319,
        ],
    ],
    [
        [
            0.15885, 0.09604, 0.04606, 0.02309, 0.01954, 0.01551, 0.01211, 0.01075, 0.01211,
            0.01551, 0.01954, 0.02309, 0.04606, 0.09604, 0.15885,
        ],
        [
            0.09685, 0.04935, 0.03171, 0.02757, 0.02232, 0.01708, 0.01358, 0.01282, 0.01441,
            0.01726, 0.02031, 0.04912, 0.10142, 0.16604, 0.24191,
        ],
        [
            0.05436, 0.04162, 0.03710, 0.03078, 0.02372, 0.01806, 0.01518, 0.01490, 0.01636,
            0.01857, 0.05364, 0.10811, 0.17444, 0.25176, 0.33922,
        ],
        [
            0.05271, 0.04809, 0.04089, 0.03203, 0.02419, 0.01921, 0.01701, 0.01691, 0.01804,
            0.05985, 0.11629, 0.18420, 0.26287, 0.35152, 0.44918,
        ],
        [
            0.06044, 0.05263, 0.04200, 0.03198, 0.02489, 0.02074, 0.01898, 0.02132, 0.06790,
            0.12612, 0.19544, 0.27533, 0.36508, 0.46372, 0.57011,
        ],
    ],
    [
        [
            0.14168, 0.08298, 0.03815, 0.02671, 0.02230, 0.01765, 0.01394, 0.01250, 0.01394,
            0.01765, 0.02230, 0.02671, 0.03815, 0.08298, 0.14168,
        ],
        [
            0.08525, 0.04342, 0.03592, 0.03069, 0.02461, 0.01895, 0.01532, 0.01458, 0.01638,
            0.01968, 0.02337, 0.03948, 0.08704, 0.14776, 0.22017,
        ],
        [
            0.05058, 0.04652, 0.04064, 0.03323, 0.02562, 0.01978, 0.01688, 0.01672, 0.01848,
            0.02118, 0.04240, 0.09251, 0.15511, 0.22907, 0.31349,
        ],
        [
            0.05842, 0.05212, 0.04351, 0.03394, 0.02588, 0.02083, 0.01868, 0.01878, 0.02027,
            0.04713, 0.09956, 0.16388, 0.23928, 0.32494, 0.41994,
        ],
        [
            0.06509, 0.05544, 0.04391, 0.03363, 0.02642, 0.02227, 0.02062, 0.02074, 0.05383,
            0.10833, 0.17420, 0.25089, 0.33769, 0.43371, 0.53785,
        ],
    ],
];

pub(crate) const GENERIC_CM: [[[f64; 15]; 5]; 4] = [
    [
        [
            0.05100, 0.03500, 0.01900, 0.00300, -0.00000, -0.00000, -0.00000, -0.00000,
            -0.00000, -0.00000, -0.00000, -0.00300, -0.01900, -0.03500, -0.05100,
        ],
        [
            -0.09700, -0.11300, -0.12900, -0.13000, -0.13000, -0.13000, -0.13000, -0.13000,
            -0.13000, -0.13000, -0.13500, -0.15100, -0.16700, -0.18300, -0.19900,
        ],
        [
            -0.24500, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000,
            -0.26000, -0.26700, -0.28300, -0.29900, -0.31500, -0.33100, -0.34700,
        ],
        [
            -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000,
            -0.39900, -0.41500, -0.43100, -0.44700, -0.46300, -0.47900, -0.49500,
        ],
        [
            -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.53100,
            -0.54700, -0.56300, -0.57900, -0.59500, -0.61100, -0.62700, -0.64300,
        ],
    ],
    [
        [
            0.04600, 0.03000, 0.01400, -0.00000, -0.00000, -0.00000, -0.00000, -0.00000,
            -0.00000, -0.00000, -0.00000, -0.00000, -0.01400, -0.03000, -0.04600,
        ],
        [
            -0.10200, -0.11800, -0.13000, -0.13000, -0.13000, -0.13000, -0.13000, -0.13000,
            -0.13000, -0.13000, -0.13000, -0.14600, -0.16200, -0.17800, -0.19400,
        ],
        [
            -0.25000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000,
            -0.26000, -0.26200, -0.27800, -0.29400, -0.31000, -0.32600, -0.34200,
        ],
        [
            -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000,
            -0.39400, -0.41000, -0.42600, -0.44200, -0.45800, -0.47400, -0.49000,
        ],
        [
            -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52600,
            -0.54200, -0.55800, -0.57400, -0.59000, -0.60600, -0.62200, -0.63800,
        ],
    ],
    [
        [
            0.04100, 0.02500, 0.00900, -0.00000, -0.00000, -0.00000, -0.00000, -0.00000,
            -0.00000, -0.00000, -0.00000, -0.00000, -0.00900, -0.02500, -0.04100,
        ],
        [
            -0.10700, -0.12300, -0.13000, -0.13000, -0.13000, -0.13000, -0.13000, -0.13000,
            -0.13000, -0.13000, -0.13000, -0.14100, -0.15700, -0.17300, -0.18900,
        ],
        [
            -0.25500, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000,
            -0.26000, -0.26000, -0.27300, -0.28900, -0.30500, -0.32100, -0.33700,
        ],
        [
            -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000,
            -0.39000, -0.40500, -0.42100, -0.43700, -0.45300, -0.46900, -0.48500,
        ],
        [
            -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52100,
            -0.53700, -0.55300, -0.56900, -0.58500, -0.60100, -0.61700, -0.63300,
        ],
    ],
    [
        [
            0.03600, 0.02000, 0.00400, -0.00000, -0.00000, -0.00000, -0.00000, -0.00000,
            -0.00000, -0.00000, -0.00000, -0.00000, -0.00400, -0.02000, -0.03600,
        ],
        [
            -0.11200, -0.12800, -0.13000, -0.13000, -0.13000, -0.13000, -0.13000, -0.13000,
            -0.13000, -0.13000, -0.13000, -0.13600, -0.15200, -0.16800, -0.18400,
        ],
        [
            -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000, -0.26000,
            -0.26000, -0.26000, -0.26800, -0.28400, -0.30000, -0.31600, -0.33200,
        ],
        [
            -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000, -0.39000,
            -0.39000, -0.40000, -0.41600, -0.43200, -0.44800, -0.46400, -0.48000,
        ],
        [
            -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000, -0.52000,
            -0.53200, -0.54800, -0.56400, -0.58000, -0.59600, -0.61200, -0.62800,
        ],
    ],
];

pub(crate) const NACA_0012: PolarData<15> = PolarData {
    cl: [
        -0.95818, -1.01091, -1.12929, -1.26257, -1.07798, -0.80287, -0.43320, 0.00000, 0.43320,
        0.80287, 1.07798, 1.26257, 1.12929, 1.01091, 0.95818,
    ],
    cd: [
        0.16982, 0.10468, 0.05191, 0.02086, 0.01783, 0.01421, 0.01101, 0.00970, 0.01101,
        0.01421, 0.01783, 0.02086, 0.05191, 0.10468, 0.16982,
    ],
    cm: [
        0.04400, 0.02800, 0.01200, -0.00000, -0.00000, -0.00000, -0.00000, -0.00000, -0.00000,
        -0.00000, -0.00000, -0.00000, -0.01200, -0.02800, -0.04400,
    ],
};

pub(crate) const NACA_4412: PolarData<15> = PolarData {
    cl: [
        -0.93939, -1.05030, -1.21826, -1.06435, -0.81976, -0.47119, -0.04451, 0.39374, 0.78499,
        1.09681, 1.32361, 1.23813, 1.11538, 1.06339, 1.04423,
    ],
    cd: [
        0.11631, 0.06266, 0.02786, 0.02472, 0.02039, 0.01568, 0.01223, 0.01134, 0.01281,
        0.01552, 0.01835, 0.04567, 0.09758, 0.16177, 0.23722,
    ],
    cm: [
        -0.07440, -0.09040, -0.10400, -0.10400, -0.10400, -0.10400, -0.10400, -0.10400,
        -0.10400, -0.10400, -0.10400, -0.11440, -0.13040, -0.14640, -0.16240,
    ],
};

pub(crate) const NACA_63_412: PolarData<15> = PolarData {
    cl: [
        -0.94364, -1.02404, -1.19666, -1.15730, -0.94199, -0.62740, -0.22310, 0.21907, 0.63168,
        0.96868, 1.21540, 1.28353, 1.11282, 1.03538, 1.00344,
    ],
    cd: [
        0.13905, 0.08005, 0.03435, 0.02302, 0.01933, 0.01510, 0.01169, 0.01059, 0.01203,
        0.01498, 0.01814, 0.02932, 0.07557, 0.13479, 0.20571,
    ],
    cm: [
        -0.02112, -0.03712, -0.05312, -0.05720, -0.05720, -0.05720, -0.05720, -0.05720,
        -0.05720, -0.05720, -0.05720, -0.06112, -0.07712, -0.09312, -0.10912,
    ],
};

pub(crate) const EPPLER_E817: PolarData<25> = PolarData {
    cl: [
        -0.96050, -1.02109, -1.10862, -1.19743, -1.12984, -1.04271, -0.93257, -0.79677,
        -0.63441, -0.44725, -0.24037, -0.02207, 0.19757, 0.40952, 0.60637, 0.78280, 0.93595,
        1.06526, 1.17189, 1.25814, 1.20941, 1.11681, 1.05285, 1.00971, 0.98122,
    ],
    cd: [
        0.08679, 0.06100, 0.03863, 0.02277, 0.02152, 0.02000, 0.01823, 0.01628, 0.01429,
        0.01245, 0.01099, 0.01010, 0.00988, 0.01031, 0.01126, 0.01259, 0.01408, 0.01561,
        0.01704, 0.01831, 0.03065, 0.05264, 0.07800, 0.10654, 0.13810,
    ],
    cm: [
        -0.02940, -0.03740, -0.04540, -0.05200, -0.05200, -0.05200, -0.05200, -0.05200,
        -0.05200, -0.05200, -0.05200, -0.05200, -0.05200, -0.05200, -0.05200, -0.05200,
        -0.05200, -0.05200, -0.05200, -0.05200, -0.05700, -0.06500, -0.07300, -0.08100,
        -0.08900,
    ],
};

pub(crate) const EPPLER_E836: PolarData<25> = PolarData {
    cl: [
        -1.01299, -1.08869, -1.19712, -1.19463, -1.11744, -1.01924, -0.89694, -0.74861,
        -0.57439, -0.37732, -0.16362, 0.05772, 0.27719, 0.48709, 0.68119, 0.85514, 1.00672,
        1.13561, 1.24295, 1.33079, 1.24447, 1.15628, 1.09609, 1.05607, 1.03010,
    ],
    cd: [
        0.07514, 0.05124, 0.03097, 0.02473, 0.02324, 0.02146, 0.01944, 0.01727, 0.01511,
        0.01318, 0.01170, 0.01084, 0.01066, 0.01113, 0.01211, 0.01343, 0.01493, 0.01646,
        0.01791, 0.01922, 0.03537, 0.05803, 0.08403, 0.11318, 0.14533,
    ],
    cm: [
        -0.05438, -0.06238, -0.07038, -0.07280, -0.07280, -0.07280, -0.07280, -0.07280,
        -0.07280, -0.07280, -0.07280, -0.07280, -0.07280, -0.07280, -0.07280, -0.07280,
        -0.07280, -0.07280, -0.07280, -0.07280, -0.07938, -0.08738, -0.09538, -0.10338,
        -0.11138,
    ],
};

pub(crate) const ANALYTIC_DRAG_POLY: [[[f64; 3]; 4]; 5] = [
    [
        [0.007500, 0.000000, 0.000120],
        [0.009000, 0.000000, 0.000140],
        [0.010500, 0.000000, 0.000160],
        [0.012000, 0.000000, 0.000180],
    ],
    [
        [0.010500, 0.000600, 0.000120],
        [0.012125, 0.000700, 0.000140],
        [0.013750, 0.000800, 0.000160],
        [0.015375, 0.000900, 0.000180],
    ],
    [
        [0.015000, 0.001200, 0.000120],
        [0.017000, 0.001400, 0.000140],
        [0.019000, 0.001600, 0.000160],
        [0.021000, 0.001800, 0.000180],
    ],
    [
        [0.021000, 0.001800, 0.000120],
        [0.023625, 0.002100, 0.000140],
        [0.026250, 0.002400, 0.000160],
        [0.028875, 0.002700, 0.000180],
    ],
    [
        [0.028500, 0.002400, 0.000120],
        [0.032000, 0.002800, 0.000140],
        [0.035500, 0.003200, 0.000160],
        [0.039000, 0.003600, 0.000180],
    ],
];

// Round bodies: (log10 Re, Cd) on frontal area.
pub(crate) const CYLINDER_SMOOTH: [(f64, f64); 12] = [
    (0.0, 10.0),
    (1.0, 2.8),
    (2.0, 1.45),
    (3.0, 1.0),
    (4.0, 1.15),
    (5.0, 1.2),
    (5.3, 1.1),
    (5.5, 0.45),
    (5.7, 0.3),
    (6.0, 0.35),
    (6.5, 0.5),
    (7.0, 0.6),
];

pub(crate) const CYLINDER_ROUGH: [(f64, f64); 10] = [
    (0.0, 10.0),
    (1.0, 2.8),
    (2.0, 1.45),
    (3.0, 1.0),
    (4.0, 1.15),
    (4.9, 1.15),
    (5.2, 0.8),
    (5.5, 0.7),
    (6.0, 0.8),
    (7.0, 0.9),
];

pub(crate) const SPHERE_SMOOTH: [(f64, f64); 10] = [
    (0.0, 26.0),
    (1.0, 4.2),
    (2.0, 1.1),
    (3.0, 0.47),
    (4.0, 0.4),
    (5.0, 0.47),
    (5.4, 0.45),
    (5.55, 0.1),
    (6.0, 0.15),
    (7.0, 0.2),
];

pub(crate) const SPHERE_ROUGH: [(f64, f64); 9] = [
    (0.0, 26.0),
    (1.0, 4.2),
    (2.0, 1.1),
    (3.0, 0.47),
    (4.0, 0.4),
    (5.0, 0.45),
    (5.2, 0.2),
    (5.5, 0.25),
    (7.0, 0.3),
];
