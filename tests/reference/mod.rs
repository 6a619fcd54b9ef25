//! Reference results for the six-element example rotor
//!
//! Two samples with bearing `kxx = [1e6, 2e6]` and `cxx = [1e3, 2e3]`.

#![allow(clippy::excessive_precision)]

use num_complex::Complex64;

const fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Damped natural frequencies, indexed [mode][speed][sample]
pub const CAMPBELL_WD: [[[f64; 2]; 11]; 6] = [
    [
        [96.3799379, 107.69984343],
        [96.31442399, 107.59665761],
        [96.2486433, 107.49310785],
        [96.18259489, 107.3891937],
        [96.1162778, 107.28491475],
        [96.04969111, 107.18027058],
        [95.98283388, 107.07526081],
        [95.91570517, 106.96988508],
        [95.84830408, 106.86414304],
        [95.78062967, 106.75803436],
        [95.71268103, 106.65155874],
    ],
    [
        [96.3799379, 107.69984343],
        [96.44518597, 107.80266577],
        [96.51016917, 107.90512511],
        [96.57488843, 108.00722194],
        [96.63934474, 108.10895678],
        [96.70353904, 108.21033015],
        [96.76747229, 108.31134261],
        [96.83114548, 108.41199472],
        [96.89455957, 108.51228706],
        [96.95771553, 108.61222022],
        [97.02061433, 108.71179481],
    ],
    [
        [298.26815963, 366.00322751],
        [297.24844811, 365.08745483],
        [296.22737131, 364.16826537],
        [295.20500098, 363.24569809],
        [294.18140949, 362.31979308],
        [293.15666973, 361.39059156],
        [292.13085515, 360.45813589],
        [291.10403969, 359.52246953],
        [290.07629773, 358.58363707],
        [289.04770409, 357.64168422],
        [288.01833396, 356.69665776],
    ],
    [
        [298.26815963, 366.00322751],
        [299.2864347, 366.9155456],
        [300.30320286, 367.82437242],
        [301.3183943, 368.72967244],
        [302.33193991, 369.63141127],
        [303.34377136, 370.52955566],
        [304.35382106, 371.4240735],
        [305.36202222, 372.31493382],
        [306.36830887, 373.20210678],
        [307.37261591, 374.08556367],
        [308.37487908, 374.9652769],
    ],
    [
        [757.74833789, 939.26471534],
        [753.12163732, 934.22320534],
        [748.46165664, 929.09822301],
        [743.76968677, 923.88961209],
        [739.04708033, 918.59746959],
        [734.29525025, 913.22216688],
        [729.51566813, 907.7643689],
        [724.70986225, 902.22505055],
        [719.8794153, 896.60551007],
        [715.02596181, 890.90737861],
        [710.1511852, 885.13262571],
    ],
    [
        [757.74833789, 939.26471534],
        [762.34053017, 944.22313987],
        [766.8970495, 949.09907285],
        [771.41679528, 953.89329143],
        [775.89873122, 958.6067322],
        [780.34188532, 963.24046803],
        [784.74534972, 967.79568581],
        [789.10828022, 972.27366533],
        [793.42989571, 976.67575975],
        [797.70947737, 981.00337746],
        [801.94636773, 985.25796579],
    ],
];

/// Logarithmic decrement, indexed [mode][speed][sample]
pub const CAMPBELL_LOG_DEC: [[[f64; 2]; 11]; 6] = [
    [
        [0.12084052, 0.08299255],
        [0.12050494, 0.08266962],
        [0.12016825, 0.08234609],
        [0.11983047, 0.08202195],
        [0.11949159, 0.08169722],
        [0.11915161, 0.08137189],
        [0.11881054, 0.08104598],
        [0.11846837, 0.0807195],
        [0.11812511, 0.08039246],
        [0.11778076, 0.08006485],
        [0.11743533, 0.07973669],
    ],
    [
        [0.12084052, 0.08299255],
        [0.12117501, 0.08331485],
        [0.12150839, 0.08363653],
        [0.12184067, 0.08395758],
        [0.12217185, 0.08427799],
        [0.12250192, 0.08459776],
        [0.12283089, 0.08491687],
        [0.12315876, 0.08523533],
        [0.12348552, 0.08555312],
        [0.12381118, 0.08587024],
        [0.12413573, 0.08618669],
    ],
    [
        [0.6191353, 0.51868663],
        [0.62004766, 0.51992251],
        [0.62093892, 0.52114782],
        [0.62180879, 0.52236224],
        [0.62265701, 0.52356544],
        [0.6234833, 0.5247571],
        [0.6242874, 0.5259369],
        [0.62506904, 0.52710451],
        [0.62582798, 0.52825961],
        [0.62656398, 0.52940188],
        [0.6272768, 0.53053101],
    ],
    [
        [0.6191353, 0.51868663],
        [0.61820214, 0.51744051],
        [0.61724848, 0.51618446],
        [0.61627461, 0.51491881],
        [0.61528085, 0.51364388],
        [0.61426751, 0.51235999],
        [0.61323492, 0.51106746],
        [0.61218338, 0.50976661],
        [0.61111324, 0.50845774],
        [0.61002483, 0.50714118],
        [0.60891848, 0.50581723],
    ],
    [
        [1.31300861, 1.92588996],
        [1.30512986, 1.90591603],
        [1.29710066, 1.88566575],
        [1.28892572, 1.86516039],
        [1.2806101, 1.84442254],
        [1.27215919, 1.82347604],
        [1.26357873, 1.80234582],
        [1.25487476, 1.78105774],
        [1.24605361, 1.75963845],
        [1.23712187, 1.73811517],
        [1.22808639, 1.71651555],
    ],
    [
        [1.31300861, 1.92588996],
        [1.3207326, 1.94556769],
        [1.32829787, 1.96493091],
        [1.33570087, 1.98396282],
        [1.34293842, 2.00264824],
        [1.35000777, 2.02097357],
        [1.35690652, 2.03892682],
        [1.36363268, 2.05649757],
        [1.37018466, 2.07367695],
        [1.37656123, 2.09045759],
        [1.38276153, 2.10683357],
    ],
];

/// Receptance at DOF 13, indexed [frequency][sample]
pub const FRF_MAGNITUDE: [[f64; 2]; 21] = [
    [1.58882967e-06, 1.33882967e-06],
    [1.62744382e-06, 1.36477912e-06],
    [1.75568617e-06, 1.44916962e-06],
    [2.02223729e-06, 1.61623355e-06],
    [2.57176206e-06, 1.92894907e-06],
    [3.96617624e-06, 2.57268939e-06],
    [1.17272387e-05, 4.36496955e-06],
    [8.12057606e-06, 2.37144586e-05],
    [2.79043057e-06, 5.37770966e-06],
    [1.5851883e-06, 2.26831507e-06],
    [1.06229427e-06, 1.36916161e-06],
    [7.73997926e-07, 9.47212517e-07],
    [5.9336094e-07, 7.04894551e-07],
    [4.70721895e-07, 5.49092077e-07],
    [3.82718554e-07, 4.41362159e-07],
    [3.1694575e-07, 3.62980216e-07],
    [2.66224004e-07, 3.03754535e-07],
    [2.2612106e-07, 2.57674896e-07],
    [1.93759548e-07, 2.20975147e-07],
    [1.67194696e-07, 1.91180171e-07],
    [1.45067953e-07, 1.66599615e-07],
];

pub const FRF_PHASE: [[f64; 2]; 21] = [
    [1.45089284e-15, 6.54838413e-16],
    [-0.00486629256, -0.00287216612],
    [-0.0107029194, -0.00620826058],
    [-0.0190893779, -0.0106942332],
    [-0.0338321163, -0.0177221761],
    [-0.069020358, -0.0311077414],
    [-0.26501671, -0.0674184855],
    [-2.91045618, -0.482441643],
    [-3.0431612, -3.01198713],
    [-3.07219608, -3.0745267],
    [-3.08401017, -3.09200706],
    [-3.08969118, -3.09965998],
    [-3.09235689, -3.10349082],
    [-3.09320123, -3.1053662],
    [-3.09275565, -3.10604441],
    [-3.091267, -3.10588094],
    [-3.08883657, -3.10505379],
    [-3.08547772, -3.1036504],
    [-3.08114028, -3.10170577],
    [-3.07571909, -3.09922036],
    [-3.06905308, -3.09616849],
];

/// Unbalance response of sample 0 at the first eight frequencies and DOFs,
/// indexed [frequency][dof]
pub const UNBALANCE_RESP: [[Complex64; 8]; 8] = [
    [
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
    ],
    [
        c(3.37435976e-07, -8.6848207e-09),
        c(-8.6848207e-09, -3.37435976e-07),
        c(9.00209719e-10, 1.45114527e-06),
        c(1.45114527e-06, -9.00209715e-10),
        c(6.87245293e-07, -8.90049158e-09),
        c(-8.90049158e-09, -6.87245293e-07),
        c(7.83414977e-10, 1.28831088e-06),
        c(1.28831088e-06, -7.83414974e-10),
    ],
    [
        c(1.75768084e-06, -1.0106888e-07),
        c(-1.0106888e-07, -1.75768084e-06),
        c(4.79346233e-08, 7.33456232e-06),
        c(7.33456232e-06, -4.79346233e-08),
        c(3.52371378e-06, -1.12554546e-07),
        c(-1.12554546e-07, -3.52371378e-06),
        c(4.17303088e-08, 6.48704574e-06),
        c(6.48704574e-06, -4.17303088e-08),
    ],
    [
        c(7.50676607e-06, -9.12209199e-07),
        c(-9.12209199e-07, -7.50676607e-06),
        c(1.28086454e-06, 2.98912386e-05),
        c(2.98912386e-05, -1.28086454e-06),
        c(1.46900142e-05, -1.21918813e-06),
        c(-1.21918813e-06, -1.46900142e-05),
        c(1.11573867e-06, 2.62670396e-05),
        c(2.62670396e-05, -1.11573867e-06),
    ],
    [
        c(-6.18015733e-05, -3.00382924e-05),
        c(-3.00382924e-05, 6.18015733e-05),
        c(0.000134528953, -0.000214597175),
        c(-0.000214597175, -0.000134528953),
        c(-0.000113214987, -6.2290482e-05),
        c(-6.2290482e-05, 0.000113214987),
        c(0.000117283028, -0.000186678717),
        c(-0.000186678717, -0.000117283028),
    ],
    [
        c(-1.38700091e-05, 2.08259695e-08),
        c(2.08259695e-08, 1.38700091e-05),
        c(6.46783937e-06, -4.63275792e-05),
        c(-4.63275792e-05, -6.46783937e-06),
        c(-2.49272456e-05, -1.53041944e-06),
        c(-1.53041944e-06, 2.49272456e-05),
        c(5.64471769e-06, -3.97928561e-05),
        c(-3.97928561e-05, -5.64471769e-06),
    ],
    [
        c(-1.02696016e-05, 5.04852144e-07),
        c(5.04852144e-07, 1.02696016e-05),
        c(3.99127894e-06, -3.09402605e-05),
        c(-3.09402605e-05, -3.99127894e-06),
        c(-1.7616122e-05, -4.52895726e-07),
        c(-4.52895726e-07, 1.7616122e-05),
        c(3.48788819e-06, -2.61160471e-05),
        c(-2.61160471e-05, -3.48788819e-06),
    ],
    [
        c(-9.35892715e-06, 7.25075254e-07),
        c(7.25075254e-07, 9.35892715e-06),
        c(3.60633532e-06, -2.49610892e-05),
        c(-2.49610892e-05, -3.60633532e-06),
        c(-1.52457821e-05, -1.40815948e-07),
        c(-1.40815948e-07, 1.52457821e-05),
        c(3.15637404e-06, -2.05887194e-05),
        c(-2.05887194e-05, -3.15637404e-06),
    ],
];

pub const UNBALANCE_MAGNITUDE: [[f64; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [3.37547721e-07, 3.37547721e-07, 1.45114555e-06, 1.45114555e-06, 6.87302926e-07, 6.87302926e-07, 1.28831112e-06, 1.28831112e-06],
    [1.76058423e-06, 1.76058423e-06, 7.33471896e-06, 7.33471896e-06, 3.52551093e-06, 3.52551093e-06, 6.48717996e-06, 6.48717996e-06],
    [7.561988e-06, 7.561988e-06, 2.99186691e-05, 2.99186691e-05, 1.47405202e-05, 1.47405202e-05, 2.62907254e-05, 2.62907254e-05],
    [6.87148708e-05, 6.87148708e-05, 0.000253278476, 0.000253278476, 0.000129219725, 0.000129219725, 0.000220463721, 0.000220463721],
    [1.38700247e-05, 1.38700247e-05, 4.67768911e-05, 4.67768911e-05, 2.49741818e-05, 2.49741818e-05, 4.01912209e-05, 4.01912209e-05],
    [1.02820033e-05, 1.02820033e-05, 3.11966349e-05, 3.11966349e-05, 1.76219428e-05, 1.76219428e-05, 2.63479275e-05, 2.63479275e-05],
    [9.38697244e-06, 9.38697244e-06, 2.52202623e-05, 2.52202623e-05, 1.52464324e-05, 1.52464324e-05, 2.08292598e-05, 2.08292598e-05],
];

pub const UNBALANCE_PHASE: [[f64; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [-0.0257320037, -1.59652833, 1.57017598, -0.000620344232, -0.0129502437, -1.58374657, 1.57018823, -0.000608094592],
    [-0.0574380212, -1.62823435, 1.56426098, -0.00653535122, -0.031931166, -1.60272749, 1.56436355, -0.00643277924],
    [-0.12092537, -1.6917217, 1.52797169, -0.0428246367, -0.0828045733, -1.6536009, 1.52834509, -0.0424512383],
    [-2.68917194, 2.02321704, -1.01083863, -2.58163496, -2.63859864, 2.07379034, -1.00985519, -2.58065151],
    [3.14009114, 1.56929482, -1.43208193, -3.00287826, -3.08027417, 1.63211481, -1.42988392, -3.00068025],
    [3.09247234, 1.52167601, -1.4425053, -3.01330162, -3.11588915, 1.59649983, -1.43802853, -3.00882486],
    [3.06427292, 1.49347659, -1.42731092, -2.99810724, -3.13235653, 1.58003245, -1.41867471, -2.98947104],
];

/// Displacements at the first eight DOFs, indexed [sample][time][dof]
pub const TIME_YOUT: [[[f64; 8]; 5]; 2] = [
    [
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [1.41926788e-06, -4.76460045e-06, 2.07102404e-05, 6.16414329e-06, 2.90572612e-06, -9.75899792e-06, 1.84111116e-05, 5.47908613e-06],
        [-4.19299249e-06, -2.72072007e-06, 1.18190692e-05, -1.8227663e-05, -8.58856216e-06, -5.5708803e-06, 1.05060401e-05, -1.62024453e-05],
        [-3.79851214e-06, 3.24877791e-06, -1.41256904e-05, -1.65046953e-05, -7.77860208e-06, 6.65516143e-06, -1.2556198e-05, -1.4671049e-05],
        [2.03783269e-06, 4.56404302e-06, -1.98336856e-05, 8.86369112e-06, 4.17529112e-06, 9.3469121e-06, -1.7630151e-05, 7.8788052e-06],
    ],
    [
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [1.48084281e-06, -4.85047585e-06, 4.21928512e-05, 1.28581579e-05, 4.58105873e-06, -1.50244567e-05, 3.74957287e-05, 1.1423404e-05],
        [-4.19558895e-06, -2.72284012e-06, 2.36499572e-05, -3.64745372e-05, -1.29913427e-05, -8.42599304e-06, 2.10223709e-05, -3.24217457e-05],
        [-3.79910377e-06, 3.24942961e-06, -2.82561248e-05, -3.30133748e-05, -1.17602388e-05, 1.00633351e-05, -2.51165462e-05, -2.93455705e-05],
        [2.03823954e-06, 4.56492726e-06, -3.96735422e-05, 1.77304732e-05, 6.31389854e-06, 1.41321453e-05, -3.52656873e-05, 1.57603189e-05],
    ],
];
