use crate::spectrum::Observer;
use crate::Float;

/// The CIE 1931 2º standard observer at 1nm resolution.
///
/// The table covers 360 to 830nm. Values at multiples of 5nm are those of CIE
/// 15:2004; values in between are linearly interpolated.
pub static CIE_OBSERVER_2DEG_1931: Observer = Observer::new(
    "CIE 1931 2º Standard Observer",
    360,
    [106.865731587173, 106.85702656473, 106.8921083],
    &CIE_OBSERVER_2DEG_1931_DATA,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const CIE_OBSERVER_2DEG_1931_DATA: [[Float; 3]; 471] = [
    [0.0001299, 3.917e-06, 0.0006061], // 360
    [0.00015034, 4.5266e-06, 0.00070208], // 361
    [0.00017078, 5.1362e-06, 0.00079806], // 362
    [0.00019122, 5.7458e-06, 0.00089404], // 363
    [0.00021166, 6.3554e-06, 0.00099002], // 364
    [0.0002321, 6.965e-06, 0.001086], // 365
    [0.00026866, 8.05e-06, 0.001258], // 366
    [0.00030522, 9.135e-06, 0.00143], // 367
    [0.00034178, 1.022e-05, 0.001602], // 368
    [0.00037834, 1.1305e-05, 0.001774], // 369
    [0.0004149, 1.239e-05, 0.001946], // 370
    [0.00048024, 1.4316e-05, 0.002254], // 371
    [0.00054558, 1.6242e-05, 0.002562], // 372
    [0.00061092, 1.8168e-05, 0.00287], // 373
    [0.00067626, 2.0094e-05, 0.003178], // 374
    [0.0007416, 2.202e-05, 0.003486], // 375
    [0.00086688, 2.5416e-05, 0.0040788], // 376
    [0.00099216, 2.8812e-05, 0.0046716], // 377
    [0.00111744, 3.2208e-05, 0.0052644], // 378
    [0.00124272, 3.5604e-05, 0.0058572], // 379
    [0.001368, 3.9e-05, 0.00645], // 380
    [0.0015416, 4.4e-05, 0.00727], // 381
    [0.0017152, 4.9e-05, 0.00809], // 382
    [0.0018888, 5.4e-05, 0.00891], // 383
    [0.0020624, 5.9e-05, 0.00973], // 384
    [0.002236, 6.4e-05, 0.01055], // 385
    [0.0026374, 7.52e-05, 0.01245], // 386
    [0.0030388, 8.64e-05, 0.01435], // 387
    [0.0034402, 9.76e-05, 0.01625], // 388
    [0.0038416, 0.0001088, 0.01815], // 389
    [0.004243, 0.00012, 0.02005], // 390
    [0.0049244, 0.0001394, 0.023282], // 391
    [0.0056058, 0.0001588, 0.026514], // 392
    [0.0062872, 0.0001782, 0.029746], // 393
    [0.0069686, 0.0001976, 0.032978], // 394
    [0.00765, 0.000217, 0.03621], // 395
    [0.008982, 0.0002528, 0.042538], // 396
    [0.010314, 0.0002886, 0.048866], // 397
    [0.011646, 0.0003244, 0.055194], // 398
    [0.012978, 0.0003602, 0.061522], // 399
    [0.01431, 0.000396, 0.06785], // 400
    [0.016086, 0.0004448, 0.07632], // 401
    [0.017862, 0.0004936, 0.08479], // 402
    [0.019638, 0.0005424, 0.09326], // 403
    [0.021414, 0.0005912, 0.10173], // 404
    [0.02319, 0.00064, 0.1102], // 405
    [0.027254, 0.000754, 0.12964], // 406
    [0.031318, 0.000868, 0.14908], // 407
    [0.035382, 0.000982, 0.16852], // 408
    [0.039446, 0.001096, 0.18796], // 409
    [0.04351, 0.00121, 0.2074], // 410
    [0.050334, 0.001404, 0.24018], // 411
    [0.057158, 0.001598, 0.27296], // 412
    [0.063982, 0.001792, 0.30574], // 413
    [0.070806, 0.001986, 0.33852], // 414
    [0.07763, 0.00218, 0.3713], // 415
    [0.08898, 0.002544, 0.42616], // 416
    [0.10033, 0.002908, 0.48102], // 417
    [0.11168, 0.003272, 0.53588], // 418
    [0.12303, 0.003636, 0.59074], // 419
    [0.13438, 0.004, 0.6456], // 420
    [0.150458, 0.00466, 0.72429], // 421
    [0.166536, 0.00532, 0.80298], // 422
    [0.182614, 0.00598, 0.88167], // 423
    [0.198692, 0.00664, 0.96036], // 424
    [0.21477, 0.0073, 1.03905], // 425
    [0.228596, 0.00816, 1.10836], // 426
    [0.242422, 0.00902, 1.17767], // 427
    [0.256248, 0.00988, 1.24698], // 428
    [0.270074, 0.01074, 1.31629], // 429
    [0.2839, 0.0116, 1.3856], // 430
    [0.29282, 0.012648, 1.433072], // 431
    [0.30174, 0.013696, 1.480544], // 432
    [0.31066, 0.014744, 1.528016], // 433
    [0.31958, 0.015792, 1.575488], // 434
    [0.3285, 0.01684, 1.62296], // 435
    [0.332456, 0.018072, 1.64778], // 436
    [0.336412, 0.019304, 1.6726], // 437
    [0.340368, 0.020536, 1.69742], // 438
    [0.344324, 0.021768, 1.72224], // 439
    [0.34828, 0.023, 1.74706], // 440
    [0.348236, 0.02436, 1.754168], // 441
    [0.348192, 0.02572, 1.761276], // 442
    [0.348148, 0.02708, 1.768384], // 443
    [0.348104, 0.02844, 1.775492], // 444
    [0.34806, 0.0298, 1.7826], // 445
    [0.345688, 0.03144, 1.780502], // 446
    [0.343316, 0.03308, 1.778404], // 447
    [0.340944, 0.03472, 1.776306], // 448
    [0.338572, 0.03636, 1.774208], // 449
    [0.3362, 0.038, 1.77211], // 450
    [0.3327, 0.04, 1.766508], // 451
    [0.3292, 0.042, 1.760906], // 452
    [0.3257, 0.044, 1.755304], // 453
    [0.3222, 0.046, 1.749702], // 454
    [0.3187, 0.048, 1.7441], // 455
    [0.31312, 0.0504, 1.72912], // 456
    [0.30754, 0.0528, 1.71414], // 457
    [0.30196, 0.0552, 1.69916], // 458
    [0.29638, 0.0576, 1.68418], // 459
    [0.2908, 0.06, 1.6692], // 460
    [0.28286, 0.06278, 1.64098], // 461
    [0.27492, 0.06556, 1.61276], // 462
    [0.26698, 0.06834, 1.58454], // 463
    [0.25904, 0.07112, 1.55632], // 464
    [0.2511, 0.0739, 1.5281], // 465
    [0.239952, 0.077316, 1.480008], // 466
    [0.228804, 0.080732, 1.431916], // 467
    [0.217656, 0.084148, 1.383824], // 468
    [0.206508, 0.087564, 1.335732], // 469
    [0.19536, 0.09098, 1.28764], // 470
    [0.184708, 0.095304, 1.238492], // 471
    [0.174056, 0.099628, 1.189344], // 472
    [0.163404, 0.103952, 1.140196], // 473
    [0.152752, 0.108276, 1.091048], // 474
    [0.1421, 0.1126, 1.0419], // 475
    [0.132808, 0.117884, 0.99611], // 476
    [0.123516, 0.123168, 0.95032], // 477
    [0.114224, 0.128452, 0.90453], // 478
    [0.104932, 0.133736, 0.85874], // 479
    [0.09564, 0.13902, 0.81295], // 480
    [0.088114, 0.145076, 0.7736], // 481
    [0.080588, 0.151132, 0.73425], // 482
    [0.073062, 0.157188, 0.6949], // 483
    [0.065536, 0.163244, 0.65555], // 484
    [0.05801, 0.1693, 0.6162], // 485
    [0.05281, 0.177044, 0.585996], // 486
    [0.04761, 0.184788, 0.555792], // 487
    [0.04241, 0.192532, 0.525588], // 488
    [0.03721, 0.200276, 0.495384], // 489
    [0.03201, 0.20802, 0.46518], // 490
    [0.028548, 0.218136, 0.442804], // 491
    [0.025086, 0.228252, 0.420428], // 492
    [0.021624, 0.238368, 0.398052], // 493
    [0.018162, 0.248484, 0.375676], // 494
    [0.0147, 0.2586, 0.3533], // 495
    [0.01274, 0.27148, 0.33704], // 496
    [0.01078, 0.28436, 0.32078], // 497
    [0.00882, 0.29724, 0.30452], // 498
    [0.00686, 0.31012, 0.28826], // 499
    [0.0049, 0.323, 0.272], // 500
    [0.0044, 0.33986, 0.26006], // 501
    [0.0039, 0.35672, 0.24812], // 502
    [0.0034, 0.37358, 0.23618], // 503
    [0.0029, 0.39044, 0.22424], // 504
    [0.0024, 0.4073, 0.2123], // 505
    [0.00378, 0.42644, 0.20148], // 506
    [0.00516, 0.44558, 0.19066], // 507
    [0.00654, 0.46472, 0.17984], // 508
    [0.00792, 0.48386, 0.16902], // 509
    [0.0093, 0.503, 0.1582], // 510
    [0.01326, 0.52404, 0.1489], // 511
    [0.01722, 0.54508, 0.1396], // 512
    [0.02118, 0.56612, 0.1303], // 513
    [0.02514, 0.58716, 0.121], // 514
    [0.0291, 0.6082, 0.1117], // 515
    [0.035934, 0.62856, 0.10501], // 516
    [0.042768, 0.64892, 0.09832], // 517
    [0.049602, 0.66928, 0.09163], // 518
    [0.056436, 0.68964, 0.08494], // 519
    [0.06327, 0.71, 0.07825], // 520
    [0.072536, 0.72664, 0.07405], // 521
    [0.081802, 0.74328, 0.06985], // 522
    [0.091068, 0.75992, 0.06565], // 523
    [0.100334, 0.77656, 0.06145], // 524
    [0.1096, 0.7932, 0.05725], // 525
    [0.12078, 0.80696, 0.054232], // 526
    [0.13196, 0.82072, 0.051214], // 527
    [0.14314, 0.83448, 0.048196], // 528
    [0.15432, 0.84824, 0.045178], // 529
    [0.1655, 0.862, 0.04216], // 530
    [0.17755, 0.87257, 0.039696], // 531
    [0.1896, 0.88314, 0.037232], // 532
    [0.20165, 0.89371, 0.034768], // 533
    [0.2137, 0.90428, 0.032304], // 534
    [0.22575, 0.91485, 0.02984], // 535
    [0.23868, 0.92268, 0.027932], // 536
    [0.25161, 0.93051, 0.026024], // 537
    [0.26454, 0.93834, 0.024116], // 538
    [0.27747, 0.94617, 0.022208], // 539
    [0.2904, 0.954, 0.0203], // 540
    [0.30426, 0.95926, 0.01892], // 541
    [0.31812, 0.96452, 0.01754], // 542
    [0.33198, 0.96978, 0.01616], // 543
    [0.34584, 0.97504, 0.01478], // 544
    [0.3597, 0.9803, 0.0134], // 545
    [0.37445, 0.98323, 0.01247], // 546
    [0.3892, 0.98616, 0.01154], // 547
    [0.40395, 0.98909, 0.01061], // 548
    [0.4187, 0.99202, 0.00968], // 549
    [0.43345, 0.99495, 0.00875], // 550
    [0.44917, 0.99596, 0.00815], // 551
    [0.46489, 0.99697, 0.00755], // 552
    [0.48061, 0.99798, 0.00695], // 553
    [0.49633, 0.99899, 0.00635], // 554
    [0.51205, 1.0, 0.00575], // 555
    [0.52854, 0.999, 0.00538], // 556
    [0.54503, 0.998, 0.00501], // 557
    [0.56152, 0.997, 0.00464], // 558
    [0.57801, 0.996, 0.00427], // 559
    [0.5945, 0.995, 0.0039], // 560
    [0.61128, 0.99172, 0.00367], // 561
    [0.62806, 0.98844, 0.00344], // 562
    [0.64484, 0.98516, 0.00321], // 563
    [0.66162, 0.98188, 0.00298], // 564
    [0.6784, 0.9786, 0.00275], // 565
    [0.69514, 0.97328, 0.00262], // 566
    [0.71188, 0.96796, 0.00249], // 567
    [0.72862, 0.96264, 0.00236], // 568
    [0.74536, 0.95732, 0.00223], // 569
    [0.7621, 0.952, 0.0021], // 570
    [0.77818, 0.94468, 0.00204], // 571
    [0.79426, 0.93736, 0.00198], // 572
    [0.81034, 0.93004, 0.00192], // 573
    [0.82642, 0.92272, 0.00186], // 574
    [0.8425, 0.9154, 0.0018], // 575
    [0.85726, 0.90632, 0.00177], // 576
    [0.87202, 0.89724, 0.00174], // 577
    [0.88678, 0.88816, 0.00171], // 578
    [0.90154, 0.87908, 0.00168], // 579
    [0.9163, 0.87, 0.00165], // 580
    [0.92876, 0.85926, 0.0016], // 581
    [0.94122, 0.84852, 0.00155], // 582
    [0.95368, 0.83778, 0.0015], // 583
    [0.96614, 0.82704, 0.00145], // 584
    [0.9786, 0.8163, 0.0014], // 585
    [0.98814, 0.80444, 0.00134], // 586
    [0.99768, 0.79258, 0.00128], // 587
    [1.00722, 0.78072, 0.00122], // 588
    [1.01676, 0.76886, 0.00116], // 589
    [1.0263, 0.757, 0.0011], // 590
    [1.03238, 0.74458, 0.00108], // 591
    [1.03846, 0.73216, 0.00106], // 592
    [1.04454, 0.71974, 0.00104], // 593
    [1.05062, 0.70732, 0.00102], // 594
    [1.0567, 0.6949, 0.001], // 595
    [1.0578, 0.68212, 0.00096], // 596
    [1.0589, 0.66934, 0.00092], // 597
    [1.06, 0.65656, 0.00088], // 598
    [1.0611, 0.64378, 0.00084], // 599
    [1.0622, 0.631, 0.0008], // 600
    [1.05888, 0.61816, 0.00076], // 601
    [1.05556, 0.60532, 0.00072], // 602
    [1.05224, 0.59248, 0.00068], // 603
    [1.04892, 0.57964, 0.00064], // 604
    [1.0456, 0.5668, 0.0006], // 605
    [1.037, 0.55404, 0.000548], // 606
    [1.0284, 0.54128, 0.000496], // 607
    [1.0198, 0.52852, 0.000444], // 608
    [1.0112, 0.51576, 0.000392], // 609
    [1.0026, 0.503, 0.00034], // 610
    [0.98976, 0.49064, 0.00032], // 611
    [0.97692, 0.47828, 0.0003], // 612
    [0.96408, 0.46592, 0.00028], // 613
    [0.95124, 0.45356, 0.00026], // 614
    [0.9384, 0.4412, 0.00024], // 615
    [0.92161, 0.42916, 0.00023], // 616
    [0.90482, 0.41712, 0.00022], // 617
    [0.88803, 0.40508, 0.00021], // 618
    [0.87124, 0.39304, 0.0002], // 619
    [0.85445, 0.381, 0.00019], // 620
    [0.83384, 0.369, 0.000172], // 621
    [0.81323, 0.357, 0.000154], // 622
    [0.79262, 0.345, 0.000136], // 623
    [0.77201, 0.333, 0.000118], // 624
    [0.7514, 0.321, 0.0001], // 625
    [0.7296, 0.3098, 9e-05], // 626
    [0.7078, 0.2986, 8e-05], // 627
    [0.686, 0.2874, 7e-05], // 628
    [0.6642, 0.2762, 6e-05], // 629
    [0.6424, 0.265, 5e-05], // 630
    [0.6223, 0.2554, 4.6e-05], // 631
    [0.6022, 0.2458, 4.2e-05], // 632
    [0.5821, 0.2362, 3.8e-05], // 633
    [0.562, 0.2266, 3.4e-05], // 634
    [0.5419, 0.217, 3e-05], // 635
    [0.5231, 0.2086, 2.8e-05], // 636
    [0.5043, 0.2002, 2.6e-05], // 637
    [0.4855, 0.1918, 2.4e-05], // 638
    [0.4667, 0.1834, 2.2e-05], // 639
    [0.4479, 0.175, 2e-05], // 640
    [0.43048, 0.16764, 1.8e-05], // 641
    [0.41306, 0.16028, 1.6e-05], // 642
    [0.39564, 0.15292, 1.4e-05], // 643
    [0.37822, 0.14556, 1.2e-05], // 644
    [0.3608, 0.1382, 1e-05], // 645
    [0.34534, 0.13196, 8e-06], // 646
    [0.32988, 0.12572, 6e-06], // 647
    [0.31442, 0.11948, 4e-06], // 648
    [0.29896, 0.11324, 2e-06], // 649
    [0.2835, 0.107, 0.0], // 650
    [0.27054, 0.10192, 0.0], // 651
    [0.25758, 0.09684, 0.0], // 652
    [0.24462, 0.09176, 0.0], // 653
    [0.23166, 0.08668, 0.0], // 654
    [0.2187, 0.0816, 0.0], // 655
    [0.20794, 0.07748, 0.0], // 656
    [0.19718, 0.07336, 0.0], // 657
    [0.18642, 0.06924, 0.0], // 658
    [0.17566, 0.06512, 0.0], // 659
    [0.1649, 0.061, 0.0], // 660
    [0.15616, 0.057716, 0.0], // 661
    [0.14742, 0.054432, 0.0], // 662
    [0.13868, 0.051148, 0.0], // 663
    [0.12994, 0.047864, 0.0], // 664
    [0.1212, 0.04458, 0.0], // 665
    [0.11444, 0.042064, 0.0], // 666
    [0.10768, 0.039548, 0.0], // 667
    [0.10092, 0.037032, 0.0], // 668
    [0.09416, 0.034516, 0.0], // 669
    [0.0874, 0.032, 0.0], // 670
    [0.08264, 0.03024, 0.0], // 671
    [0.07788, 0.02848, 0.0], // 672
    [0.07312, 0.02672, 0.0], // 673
    [0.06836, 0.02496, 0.0], // 674
    [0.0636, 0.0232, 0.0], // 675
    [0.060234, 0.02196, 0.0], // 676
    [0.056868, 0.02072, 0.0], // 677
    [0.053502, 0.01948, 0.0], // 678
    [0.050136, 0.01824, 0.0], // 679
    [0.04677, 0.017, 0.0], // 680
    [0.043996, 0.015984, 0.0], // 681
    [0.041222, 0.014968, 0.0], // 682
    [0.038448, 0.013952, 0.0], // 683
    [0.035674, 0.012936, 0.0], // 684
    [0.0329, 0.01192, 0.0], // 685
    [0.03086, 0.011178, 0.0], // 686
    [0.02882, 0.010436, 0.0], // 687
    [0.02678, 0.009694, 0.0], // 688
    [0.02474, 0.008952, 0.0], // 689
    [0.0227, 0.00821, 0.0], // 690
    [0.021328, 0.0077126, 0.0], // 691
    [0.019956, 0.0072152, 0.0], // 692
    [0.018584, 0.0067178, 0.0], // 693
    [0.017212, 0.0062204, 0.0], // 694
    [0.01584, 0.005723, 0.0], // 695
    [0.0149438, 0.0053988, 0.0], // 696
    [0.0140476, 0.0050746, 0.0], // 697
    [0.0131514, 0.0047504, 0.0], // 698
    [0.0122552, 0.0044262, 0.0], // 699
    [0.011359, 0.004102, 0.0], // 700
    [0.0107094, 0.0038674, 0.0], // 701
    [0.0100598, 0.0036328, 0.0], // 702
    [0.0094102, 0.0033982, 0.0], // 703
    [0.0087606, 0.0031636, 0.0], // 704
    [0.008111, 0.002929, 0.0], // 705
    [0.0076468, 0.0027614, 0.0], // 706
    [0.0071826, 0.0025938, 0.0], // 707
    [0.0067184, 0.0024262, 0.0], // 708
    [0.0062542, 0.0022586, 0.0], // 709
    [0.00579, 0.002091, 0.0], // 710
    [0.0054538, 0.0019696, 0.0], // 711
    [0.0051176, 0.0018482, 0.0], // 712
    [0.0047814, 0.0017268, 0.0], // 713
    [0.0044452, 0.0016054, 0.0], // 714
    [0.004109, 0.001484, 0.0], // 715
    [0.003867, 0.0013966, 0.0], // 716
    [0.003625, 0.0013092, 0.0], // 717
    [0.003383, 0.0012218, 0.0], // 718
    [0.003141, 0.0011344, 0.0], // 719
    [0.002899, 0.001047, 0.0], // 720
    [0.002729, 0.0009856, 0.0], // 721
    [0.002559, 0.0009242, 0.0], // 722
    [0.002389, 0.0008628, 0.0], // 723
    [0.002219, 0.0008014, 0.0], // 724
    [0.002049, 0.00074, 0.0], // 725
    [0.0019272, 0.000696, 0.0], // 726
    [0.0018054, 0.000652, 0.0], // 727
    [0.0016836, 0.000608, 0.0], // 728
    [0.0015618, 0.000564, 0.0], // 729
    [0.00144, 0.00052, 0.0], // 730
    [0.001352, 0.0004882, 0.0], // 731
    [0.001264, 0.0004564, 0.0], // 732
    [0.001176, 0.0004246, 0.0], // 733
    [0.001088, 0.0003928, 0.0], // 734
    [0.001, 0.000361, 0.0], // 735
    [0.000938, 0.0003386, 0.0], // 736
    [0.000876, 0.0003162, 0.0], // 737
    [0.000814, 0.0002938, 0.0], // 738
    [0.000752, 0.0002714, 0.0], // 739
    [0.00069, 0.000249, 0.0], // 740
    [0.0006472, 0.0002336, 0.0], // 741
    [0.0006044, 0.0002182, 0.0], // 742
    [0.0005616, 0.0002028, 0.0], // 743
    [0.0005188, 0.0001874, 0.0], // 744
    [0.000476, 0.000172, 0.0], // 745
    [0.0004472, 0.0001616, 0.0], // 746
    [0.0004184, 0.0001512, 0.0], // 747
    [0.0003896, 0.0001408, 0.0], // 748
    [0.0003608, 0.0001304, 0.0], // 749
    [0.000332, 0.00012, 0.0], // 750
    [0.0003126, 0.000113, 0.0], // 751
    [0.0002932, 0.000106, 0.0], // 752
    [0.0002738, 9.9e-05, 0.0], // 753
    [0.0002544, 9.2e-05, 0.0], // 754
    [0.000235, 8.5e-05, 0.0], // 755
    [0.0002212, 8e-05, 0.0], // 756
    [0.0002074, 7.5e-05, 0.0], // 757
    [0.0001936, 7e-05, 0.0], // 758
    [0.0001798, 6.5e-05, 0.0], // 759
    [0.000166, 6e-05, 0.0], // 760
    [0.0001562, 5.64e-05, 0.0], // 761
    [0.0001464, 5.28e-05, 0.0], // 762
    [0.0001366, 4.92e-05, 0.0], // 763
    [0.0001268, 4.56e-05, 0.0], // 764
    [0.000117, 4.2e-05, 0.0], // 765
    [0.0001102, 3.96e-05, 0.0], // 766
    [0.0001034, 3.72e-05, 0.0], // 767
    [9.66e-05, 3.48e-05, 0.0], // 768
    [8.98e-05, 3.24e-05, 0.0], // 769
    [8.3e-05, 3e-05, 0.0], // 770
    [7.82e-05, 2.82e-05, 0.0], // 771
    [7.34e-05, 2.64e-05, 0.0], // 772
    [6.86e-05, 2.46e-05, 0.0], // 773
    [6.38e-05, 2.28e-05, 0.0], // 774
    [5.9e-05, 2.1e-05, 0.0], // 775
    [5.56e-05, 1.98e-05, 0.0], // 776
    [5.22e-05, 1.86e-05, 0.0], // 777
    [4.88e-05, 1.74e-05, 0.0], // 778
    [4.54e-05, 1.62e-05, 0.0], // 779
    [4.2e-05, 1.5e-05, 0.0], // 780
    [3.9470232e-05, 1.412e-05, 0.0], // 781
    [3.6940464e-05, 1.324e-05, 0.0], // 782
    [3.4410696e-05, 1.236e-05, 0.0], // 783
    [3.1880928e-05, 1.148e-05, 0.0], // 784
    [2.935116e-05, 1.06e-05, 0.0], // 785
    [2.7615694e-05, 9.97314e-06, 0.0], // 786
    [2.5880228e-05, 9.34628e-06, 0.0], // 787
    [2.4144762e-05, 8.71942e-06, 0.0], // 788
    [2.2409296e-05, 8.09256e-06, 0.0], // 789
    [2.067383e-05, 7.4657e-06, 0.0], // 790
    [1.9451018e-05, 7.02412e-06, 0.0], // 791
    [1.8228206e-05, 6.58254e-06, 0.0], // 792
    [1.7005394e-05, 6.14096e-06, 0.0], // 793
    [1.5782582e-05, 5.69938e-06, 0.0], // 794
    [1.455977e-05, 5.2578e-06, 0.0], // 795
    [1.3698612e-05, 4.94682e-06, 0.0], // 796
    [1.2837454e-05, 4.63584e-06, 0.0], // 797
    [1.1976296e-05, 4.32486e-06, 0.0], // 798
    [1.1115138e-05, 4.01388e-06, 0.0], // 799
    [1.025398e-05, 3.7029e-06, 0.0], // 800
    [9.647475e-06, 3.48388e-06, 0.0], // 801
    [9.04097e-06, 3.26486e-06, 0.0], // 802
    [8.434466e-06, 3.04584e-06, 0.0], // 803
    [7.827961e-06, 2.82682e-06, 0.0], // 804
    [7.221456e-06, 2.6078e-06, 0.0], // 805
    [6.794338e-06, 2.45356e-06, 0.0], // 806
    [6.367221e-06, 2.29932e-06, 0.0], // 807
    [5.940103e-06, 2.14508e-06, 0.0], // 808
    [5.512986e-06, 1.99084e-06, 0.0], // 809
    [5.085868e-06, 1.8366e-06, 0.0], // 810
    [4.785025e-06, 1.72796e-06, 0.0], // 811
    [4.484182e-06, 1.61932e-06, 0.0], // 812
    [4.183338e-06, 1.51068e-06, 0.0], // 813
    [3.882495e-06, 1.40204e-06, 0.0], // 814
    [3.581652e-06, 1.2934e-06, 0.0], // 815
    [3.369827e-06, 1.216906e-06, 0.0], // 816
    [3.158001e-06, 1.140412e-06, 0.0], // 817
    [2.946176e-06, 1.063918e-06, 0.0], // 818
    [2.73435e-06, 9.87424e-07, 0.0], // 819
    [2.522525e-06, 9.1093e-07, 0.0], // 820
    [2.373322e-06, 8.5705e-07, 0.0], // 821
    [2.224119e-06, 8.0317e-07, 0.0], // 822
    [2.074915e-06, 7.4929e-07, 0.0], // 823
    [1.925712e-06, 6.9541e-07, 0.0], // 824
    [1.776509e-06, 6.4153e-07, 0.0], // 825
    [1.671435e-06, 6.03586e-07, 0.0], // 826
    [1.566362e-06, 5.65642e-07, 0.0], // 827
    [1.461288e-06, 5.27698e-07, 0.0], // 828
    [1.356215e-06, 4.89754e-07, 0.0], // 829
    [1.251141e-06, 4.5181e-07, 0.0], // 830
];
